use thiserror::Error;

use crate::discretization::vector::Vector;
use crate::physics::creator::{CellCreator, CellData, CellType};

/// Integer coordinates of one cell slot, in (east, north, up) order.
///
/// Values outside the configured extents are legal and denote boundary or
/// exterior slots; classification, not range checking, is how the domain
/// edge is expressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Indices {
    pub east: i64,
    pub north: i64,
    pub up: i64,
}

impl Indices {
    pub fn new(east: i64, north: i64, up: i64) -> Self {
        Self { east, north, up }
    }

    pub fn translated(&self, east: i64, north: i64, up: i64) -> Self {
        Self::new(self.east + east, self.north + north, self.up + up)
    }
}

/// The complete rectilinear grid: a cell edge length plus the attribute
/// policy that answers every cell query.
///
/// Holds no per-cell storage. Queries recompute attributes through the
/// creator, which is pure, so a `Mesh` is safe to read from any number of
/// threads.
pub struct Mesh {
    cell_size: f64,
    creator: CellCreator,
}

impl Mesh {
    pub fn builder() -> MeshBuilder {
        MeshBuilder::default()
    }

    /// Physical edge length of a cubic cell, in metres.
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    pub fn creator(&self) -> &CellCreator {
        &self.creator
    }

    /// Look up the cell slot at the given coordinates. Total over all
    /// integer triples; out-of-extent coordinates resolve to boundary cells.
    pub fn cell(&self, east: i64, north: i64, up: i64) -> Cell<'_> {
        self.cell_at(Indices::new(east, north, up))
    }

    pub fn cell_at(&self, indices: Indices) -> Cell<'_> {
        Cell { mesh: self, indices }
    }
}

#[derive(Debug, Error)]
pub enum MeshBuildError {
    #[error("mesh requires a cell size")]
    MissingCellSize,
    #[error("mesh requires a cell creator")]
    MissingCreator,
    #[error("cell size must be positive and finite, got {0}")]
    InvalidCellSize(f64),
}

#[derive(Default)]
pub struct MeshBuilder {
    cell_size: Option<f64>,
    creator: Option<CellCreator>,
}

impl MeshBuilder {
    pub fn cell_size(mut self, cell_size: f64) -> Self {
        self.cell_size = Some(cell_size);
        self
    }

    pub fn creator(mut self, creator: CellCreator) -> Self {
        self.creator = Some(creator);
        self
    }

    /// Both fields are required; configuration problems surface here, never
    /// at query time.
    pub fn build(self) -> Result<Mesh, MeshBuildError> {
        let cell_size = self.cell_size.ok_or(MeshBuildError::MissingCellSize)?;
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(MeshBuildError::InvalidCellSize(cell_size));
        }
        let creator = self.creator.ok_or(MeshBuildError::MissingCreator)?;
        Ok(Mesh { cell_size, creator })
    }
}

/// A cell slot bound to its mesh.
///
/// Attributes are recomputed from the mesh's creator on every access; the
/// creator is pure, so repeated reads of the same slot agree.
#[derive(Clone, Copy)]
pub struct Cell<'a> {
    mesh: &'a Mesh,
    indices: Indices,
}

impl<'a> Cell<'a> {
    pub fn indices(&self) -> Indices {
        self.indices
    }

    /// Evaluate the full attribute bundle for this slot.
    pub fn data(&self) -> CellData {
        self.mesh.creator.apply(self.indices)
    }

    pub fn cell_type(&self) -> CellType {
        self.mesh.creator.cell_type(self.indices)
    }

    pub fn position(&self) -> Vector {
        self.mesh.creator.position(self.indices)
    }

    pub fn pressure(&self) -> f64 {
        self.mesh.creator.pressure(self.indices)
    }

    pub fn velocity(&self) -> Vector {
        self.mesh.creator.velocity(self.indices)
    }

    pub fn density(&self) -> f64 {
        self.mesh.creator.density()
    }

    pub fn viscosity(&self) -> f64 {
        self.mesh.creator.viscosity()
    }

    fn translated(&self, east: i64, north: i64, up: i64) -> Cell<'a> {
        Cell {
            mesh: self.mesh,
            indices: self.indices.translated(east, north, up),
        }
    }

    /// Neighbor one slot higher. Navigation is never range-checked;
    /// stepping outside the configured extents yields a boundary cell.
    pub fn up(&self) -> Cell<'a> {
        self.translated(0, 0, 1)
    }

    pub fn down(&self) -> Cell<'a> {
        self.translated(0, 0, -1)
    }

    pub fn east(&self) -> Cell<'a> {
        self.translated(1, 0, 0)
    }

    pub fn west(&self) -> Cell<'a> {
        self.translated(-1, 0, 0)
    }

    pub fn north(&self) -> Cell<'a> {
        self.translated(0, 1, 0)
    }

    pub fn south(&self) -> Cell<'a> {
        self.translated(0, -1, 0)
    }
}
