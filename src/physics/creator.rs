use std::sync::Arc;

use thiserror::Error;

use crate::discretization::mesh::Indices;
use crate::discretization::vector::Vector;
use crate::physics::water;

/// Classification of one cell slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellType {
    /// Strictly inside the configured extents.
    Fluid,
    /// Solid; the default policy floors everything below the domain.
    Obstacle,
    /// Outside the modeled domain: open air or an unmeasured exterior.
    Unknown,
}

/// Eagerly computed attribute bundle for one slot. Purity of the creator is
/// observable as field-wise equality between repeated evaluations.
#[derive(Clone, Debug, PartialEq)]
pub struct CellData {
    pub cell_type: CellType,
    pub position: Vector,
    pub pressure: f64,
    pub velocity: Vector,
    pub density: f64,
    pub viscosity: f64,
}

/// Shared rule type for scalar attributes. Rules must be pure and total
/// over all integer indices, including far out-of-extent ones.
pub type ScalarRule = Arc<dyn Fn(Indices) -> f64 + Send + Sync>;
pub type VectorRule = Arc<dyn Fn(Indices) -> Vector + Send + Sync>;
pub type TypeRule = Arc<dyn Fn(Indices) -> CellType + Send + Sync>;

/// Local trait allowing convenient conversion into [`ScalarRule`].
pub trait IntoScalarRule {
    fn into_scalar_rule(self) -> ScalarRule;
}

pub trait IntoVectorRule {
    fn into_vector_rule(self) -> VectorRule;
}

pub trait IntoTypeRule {
    fn into_type_rule(self) -> TypeRule;
}

impl IntoScalarRule for f64 {
    fn into_scalar_rule(self) -> ScalarRule {
        Arc::new(move |_| self)
    }
}

impl<F> IntoScalarRule for F
where
    F: Fn(Indices) -> f64 + Send + Sync + 'static,
{
    fn into_scalar_rule(self) -> ScalarRule {
        Arc::new(self)
    }
}

impl IntoVectorRule for Vector {
    fn into_vector_rule(self) -> VectorRule {
        Arc::new(move |_| self)
    }
}

impl<F> IntoVectorRule for F
where
    F: Fn(Indices) -> Vector + Send + Sync + 'static,
{
    fn into_vector_rule(self) -> VectorRule {
        Arc::new(self)
    }
}

impl IntoTypeRule for CellType {
    fn into_type_rule(self) -> TypeRule {
        Arc::new(move |_| self)
    }
}

impl<F> IntoTypeRule for F
where
    F: Fn(Indices) -> CellType + Send + Sync + 'static,
{
    fn into_type_rule(self) -> TypeRule {
        Arc::new(self)
    }
}

/// Pure mapping from [`Indices`] to [`CellData`].
///
/// Configured from three extents, two material constants and four attribute
/// rules. Each rule defaults to a built-in policy capturing the extents;
/// installing a custom rule replaces the default wholesale.
#[derive(Clone)]
pub struct CellCreator {
    east_size: i64,
    north_size: i64,
    up_size: i64,
    density: f64,
    viscosity: f64,
    position_rule: VectorRule,
    velocity_rule: VectorRule,
    type_rule: TypeRule,
    pressure_rule: ScalarRule,
}

impl CellCreator {
    pub fn builder() -> CellCreatorBuilder {
        CellCreatorBuilder::default()
    }

    pub fn east_size(&self) -> i64 {
        self.east_size
    }

    pub fn north_size(&self) -> i64 {
        self.north_size
    }

    pub fn up_size(&self) -> i64 {
        self.up_size
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    pub fn viscosity(&self) -> f64 {
        self.viscosity
    }

    pub fn cell_type(&self, indices: Indices) -> CellType {
        (self.type_rule)(indices)
    }

    pub fn position(&self, indices: Indices) -> Vector {
        (self.position_rule)(indices)
    }

    pub fn pressure(&self, indices: Indices) -> f64 {
        (self.pressure_rule)(indices)
    }

    pub fn velocity(&self, indices: Indices) -> Vector {
        (self.velocity_rule)(indices)
    }

    /// Evaluate every attribute rule for the given slot.
    pub fn apply(&self, indices: Indices) -> CellData {
        CellData {
            cell_type: self.cell_type(indices),
            position: self.position(indices),
            pressure: self.pressure(indices),
            velocity: self.velocity(indices),
            density: self.density,
            viscosity: self.viscosity,
        }
    }
}

#[derive(Debug, Error)]
pub enum CreatorBuildError {
    #[error("{axis} extent must be non-negative, got {size}")]
    NegativeExtent { axis: &'static str, size: i64 },
    #[error("density must be positive and finite, got {0}")]
    InvalidDensity(f64),
    #[error("viscosity must be positive and finite, got {0}")]
    InvalidViscosity(f64),
}

pub struct CellCreatorBuilder {
    east_size: i64,
    north_size: i64,
    up_size: i64,
    density: f64,
    viscosity: f64,
    position_rule: Option<VectorRule>,
    velocity_rule: Option<VectorRule>,
    type_rule: Option<TypeRule>,
    pressure_rule: Option<ScalarRule>,
}

impl Default for CellCreatorBuilder {
    fn default() -> Self {
        Self {
            east_size: 0,
            north_size: 0,
            up_size: 0,
            density: water::SEAWATER_MEAN_DENSITY_KG_PER_M3,
            viscosity: water::SEAWATER_MEAN_VISCOSITY_PA_S,
            position_rule: None,
            velocity_rule: None,
            type_rule: None,
            pressure_rule: None,
        }
    }
}

impl CellCreatorBuilder {
    pub fn east_size(mut self, east_size: i64) -> Self {
        self.east_size = east_size;
        self
    }

    pub fn north_size(mut self, north_size: i64) -> Self {
        self.north_size = north_size;
        self
    }

    pub fn up_size(mut self, up_size: i64) -> Self {
        self.up_size = up_size;
        self
    }

    pub fn density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    pub fn viscosity(mut self, viscosity: f64) -> Self {
        self.viscosity = viscosity;
        self
    }

    pub fn position_rule(mut self, rule: impl IntoVectorRule) -> Self {
        self.position_rule = Some(rule.into_vector_rule());
        self
    }

    pub fn velocity_rule(mut self, rule: impl IntoVectorRule) -> Self {
        self.velocity_rule = Some(rule.into_vector_rule());
        self
    }

    pub fn type_rule(mut self, rule: impl IntoTypeRule) -> Self {
        self.type_rule = Some(rule.into_type_rule());
        self
    }

    pub fn pressure_rule(mut self, rule: impl IntoScalarRule) -> Self {
        self.pressure_rule = Some(rule.into_scalar_rule());
        self
    }

    pub fn build(self) -> Result<CellCreator, CreatorBuildError> {
        for (axis, size) in [
            ("east", self.east_size),
            ("north", self.north_size),
            ("up", self.up_size),
        ] {
            if size < 0 {
                return Err(CreatorBuildError::NegativeExtent { axis, size });
            }
        }
        if !self.density.is_finite() || self.density <= 0.0 {
            return Err(CreatorBuildError::InvalidDensity(self.density));
        }
        if !self.viscosity.is_finite() || self.viscosity <= 0.0 {
            return Err(CreatorBuildError::InvalidViscosity(self.viscosity));
        }

        let (east_size, north_size, up_size) = (self.east_size, self.north_size, self.up_size);

        // Physical up-position is rebased so the top layer of the column
        // sits at 0 and cells descend with decreasing value.
        let position_rule = self.position_rule.unwrap_or_else(|| {
            Arc::new(move |i: Indices| {
                Vector::new(i.east as f64, i.north as f64, (i.up - up_size + 1) as f64)
            })
        });

        // No flow unless a generator is supplied.
        let velocity_rule = self
            .velocity_rule
            .unwrap_or_else(|| Vector::ZERO.into_vector_rule());

        // Floored bottom, open everywhere else. The vertical checks run
        // first: a slot below the floor is an obstacle no matter how far
        // east or north it sits.
        let type_rule = self.type_rule.unwrap_or_else(|| {
            Arc::new(move |i: Indices| {
                if i.up < 0 {
                    CellType::Obstacle
                } else if i.up > up_size - 1 {
                    // air
                    CellType::Unknown
                } else if i.east < 0 || i.east > east_size - 1 {
                    CellType::Unknown
                } else if i.north < 0 || i.north > north_size - 1 {
                    CellType::Unknown
                } else {
                    CellType::Fluid
                }
            })
        });

        // Depth counts whole layers below the surface; the top layer
        // (up = up_size - 1) sits at depth zero.
        let pressure_rule = self.pressure_rule.unwrap_or_else(|| {
            Arc::new(move |i: Indices| water::pressure_at_depth((up_size - i.up - 1) as f64))
        });

        Ok(CellCreator {
            east_size,
            north_size,
            up_size,
            density: self.density,
            viscosity: self.viscosity,
            position_rule,
            velocity_rule,
            type_rule,
            pressure_rule,
        })
    }
}
