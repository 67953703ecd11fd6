use hydromesh::discretization::mesh::{Indices, Mesh, MeshBuildError};
use hydromesh::discretization::vector::Vector;
use hydromesh::physics::creator::{CellCreator, CellType, CreatorBuildError};
use hydromesh::physics::water;

const PRECISION: f64 = 1e-5;

const EAST_SIZE: i64 = 10;
const NORTH_SIZE: i64 = 10;
const UP_SIZE: i64 = 10;

fn create_mesh() -> Mesh {
    let creator = CellCreator::builder()
        .east_size(EAST_SIZE)
        .north_size(NORTH_SIZE)
        .up_size(UP_SIZE)
        .build()
        .expect("valid creator configuration");
    Mesh::builder()
        .cell_size(1.0)
        .creator(creator)
        .build()
        .expect("valid mesh configuration")
}

#[test]
fn bottom_of_regular_grid() {
    let grid = create_mesh();
    let cell = grid.cell(5, 5, 0);
    assert_eq!(cell.cell_type(), CellType::Fluid);
    assert_eq!(cell.up().cell_type(), CellType::Fluid);
    assert_eq!(cell.down().cell_type(), CellType::Obstacle);

    assert!((grid.cell(5, 5, 9).pressure() - water::SEA_LEVEL_PRESSURE_PASCALS).abs() < PRECISION);
    assert!((grid.cell(5, 5, 8).pressure() - water::pressure_at_depth(1.0)).abs() < PRECISION);
    assert!((grid.cell(5, 5, 0).pressure() - water::pressure_at_depth(9.0)).abs() < PRECISION);
}

#[test]
fn every_cell_inside_the_extents_is_fluid() {
    let grid = create_mesh();
    for east in 0..EAST_SIZE {
        for north in 0..NORTH_SIZE {
            for up in 0..UP_SIZE {
                assert_eq!(
                    grid.cell(east, north, up).cell_type(),
                    CellType::Fluid,
                    "at ({east}, {north}, {up})"
                );
            }
        }
    }
}

#[test]
fn below_the_floor_is_obstacle_regardless_of_east_north() {
    let grid = create_mesh();
    assert_eq!(grid.cell(5, 5, -1).cell_type(), CellType::Obstacle);
    assert_eq!(grid.cell(5, 5, -30).cell_type(), CellType::Obstacle);
    // The floor rule wins even when east/north are themselves out of range.
    assert_eq!(grid.cell(-100, 999, -1).cell_type(), CellType::Obstacle);
}

#[test]
fn above_the_surface_is_unknown() {
    let grid = create_mesh();
    assert_eq!(grid.cell(5, 5, UP_SIZE).cell_type(), CellType::Unknown);
    assert_eq!(grid.cell(5, 5, UP_SIZE + 7).cell_type(), CellType::Unknown);
}

#[test]
fn open_sides_are_unknown() {
    let grid = create_mesh();
    for up in 0..UP_SIZE {
        assert_eq!(grid.cell(-1, 5, up).cell_type(), CellType::Unknown);
        assert_eq!(grid.cell(EAST_SIZE, 5, up).cell_type(), CellType::Unknown);
        assert_eq!(grid.cell(5, -1, up).cell_type(), CellType::Unknown);
        assert_eq!(grid.cell(5, NORTH_SIZE, up).cell_type(), CellType::Unknown);
    }
}

#[test]
fn pressure_increases_with_depth() {
    let grid = create_mesh();
    let mut previous = grid.cell(5, 5, UP_SIZE - 1).pressure();
    for up in (0..UP_SIZE - 1).rev() {
        let pressure = grid.cell(5, 5, up).pressure();
        assert!(
            pressure > previous,
            "pressure at up = {up} should exceed the layer above"
        );
        previous = pressure;
    }
}

#[test]
fn navigation_shifts_one_coordinate() {
    let grid = create_mesh();
    let cell = grid.cell(5, 5, 5);
    assert_eq!(cell.up().indices(), Indices::new(5, 5, 6));
    assert_eq!(cell.down().indices(), Indices::new(5, 5, 4));
    assert_eq!(cell.east().indices(), Indices::new(6, 5, 5));
    assert_eq!(cell.west().indices(), Indices::new(4, 5, 5));
    assert_eq!(cell.north().indices(), Indices::new(5, 6, 5));
    assert_eq!(cell.south().indices(), Indices::new(5, 4, 5));

    // Navigating to a slot and querying it directly must agree.
    assert_eq!(
        grid.cell(5, 5, 0).up().cell_type(),
        grid.cell(5, 5, 1).cell_type()
    );
}

#[test]
fn default_position_rebases_the_up_axis() {
    let grid = create_mesh();
    // Top layer maps to up-position 0; cells descend from there.
    assert_eq!(
        grid.cell(3, 7, UP_SIZE - 1).position(),
        Vector::new(3.0, 7.0, 0.0)
    );
    assert_eq!(grid.cell(3, 7, 0).position(), Vector::new(3.0, 7.0, -9.0));
}

#[test]
fn default_velocity_and_material_constants() {
    let grid = create_mesh();
    let cell = grid.cell(2, 2, 2);
    assert_eq!(cell.velocity(), Vector::ZERO);
    assert_eq!(cell.density(), water::SEAWATER_MEAN_DENSITY_KG_PER_M3);
    assert_eq!(cell.viscosity(), water::SEAWATER_MEAN_VISCOSITY_PA_S);
}

#[test]
fn override_rules_bypass_the_defaults() {
    let creator = CellCreator::builder()
        .east_size(EAST_SIZE)
        .north_size(NORTH_SIZE)
        .up_size(UP_SIZE)
        .pressure_rule(|i: Indices| i.up as f64)
        .velocity_rule(|i: Indices| Vector::new(i.east as f64, 0.0, 0.0))
        .type_rule(CellType::Obstacle)
        .build()
        .expect("valid creator configuration");
    let grid = Mesh::builder()
        .cell_size(0.5)
        .creator(creator)
        .build()
        .expect("valid mesh configuration");

    let cell = grid.cell(5, 5, 5);
    assert_eq!(cell.pressure(), 5.0);
    assert_eq!(cell.velocity(), Vector::new(5.0, 0.0, 0.0));
    // Inside the extents the default policy would say Fluid.
    assert_eq!(cell.cell_type(), CellType::Obstacle);
}

#[test]
fn repeated_queries_yield_equal_data() {
    let grid = create_mesh();
    for indices in [
        Indices::new(0, 0, 0),
        Indices::new(5, 5, 9),
        Indices::new(-3, 40, -2),
    ] {
        assert_eq!(grid.cell_at(indices).data(), grid.cell_at(indices).data());
    }
}

#[test]
fn mesh_builder_rejects_bad_configuration() {
    let creator = || {
        CellCreator::builder()
            .east_size(1)
            .north_size(1)
            .up_size(1)
            .build()
            .expect("valid creator configuration")
    };

    assert!(matches!(
        Mesh::builder().creator(creator()).build(),
        Err(MeshBuildError::MissingCellSize)
    ));
    assert!(matches!(
        Mesh::builder().cell_size(1.0).build(),
        Err(MeshBuildError::MissingCreator)
    ));
    assert!(matches!(
        Mesh::builder().cell_size(0.0).creator(creator()).build(),
        Err(MeshBuildError::InvalidCellSize(_))
    ));
    assert!(matches!(
        Mesh::builder().cell_size(-2.0).creator(creator()).build(),
        Err(MeshBuildError::InvalidCellSize(_))
    ));
}

#[test]
fn creator_builder_rejects_bad_configuration() {
    assert!(matches!(
        CellCreator::builder().up_size(-4).build(),
        Err(CreatorBuildError::NegativeExtent { axis: "up", size: -4 })
    ));
    assert!(matches!(
        CellCreator::builder().density(0.0).build(),
        Err(CreatorBuildError::InvalidDensity(_))
    ));
    assert!(matches!(
        CellCreator::builder().viscosity(-1.0).build(),
        Err(CreatorBuildError::InvalidViscosity(_))
    ));
}

#[test]
fn zero_extent_mesh_is_all_boundary() {
    // Extents of zero are legal; every slot is then a boundary slot.
    let creator = CellCreator::builder().build().expect("valid configuration");
    let grid = Mesh::builder()
        .cell_size(1.0)
        .creator(creator)
        .build()
        .expect("valid mesh configuration");
    assert_eq!(grid.cell(0, 0, 0).cell_type(), CellType::Unknown);
    assert_eq!(grid.cell(0, 0, -1).cell_type(), CellType::Obstacle);
}
