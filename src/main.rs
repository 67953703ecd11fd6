use hydromesh::discretization::mesh::Mesh;
use hydromesh::physics::creator::{CellCreator, CellType};
use hydromesh::physics::water;
use hydromesh::processing::stats::scan_layer;

const CELLS_EAST: i64 = 10;
const CELLS_NORTH: i64 = 10;
const CELLS_UP: i64 = 4;

fn main() {
    let creator = CellCreator::builder()
        .east_size(CELLS_EAST)
        .north_size(CELLS_NORTH)
        .up_size(CELLS_UP)
        .build()
        .expect("valid creator configuration");
    let mesh = Mesh::builder()
        .cell_size(1.0)
        .creator(creator)
        .build()
        .expect("valid mesh configuration");

    println!("{}", "=".repeat(60));
    println!("{:^60}", "HYDROMESH DEMO COLUMN");
    println!("{}", "=".repeat(60));
    println!(
        "extents: {} east x {} north x {} up, cell size {} m",
        CELLS_EAST,
        CELLS_NORTH,
        CELLS_UP,
        mesh.cell_size()
    );
    println!();

    print_classification(&mesh, CELLS_UP - 1);
    print_classification(&mesh, -1);
    print_pressure_profile(&mesh);
    print_layer_stats(&mesh);
}

fn type_glyph(cell_type: CellType) -> char {
    match cell_type {
        CellType::Fluid => '~',
        CellType::Obstacle => '#',
        CellType::Unknown => '.',
    }
}

/// Print the classification map for one layer, one ring past each extent so
/// the open boundaries are visible.
fn print_classification(mesh: &Mesh, up: i64) {
    println!("classification at up = {up}:");
    for north in (-1..=CELLS_NORTH).rev() {
        let row: String = (-1..=CELLS_EAST)
            .map(|east| type_glyph(mesh.cell(east, north, up).cell_type()))
            .collect();
        println!("  {row}");
    }
    println!();
}

fn print_pressure_profile(mesh: &Mesh) {
    println!("hydrostatic profile at east = 5, north = 5:");
    println!("  {:>4} | {:>12} | {:>8}", "up", "pressure", "type");
    for up in (-1..=CELLS_UP).rev() {
        let cell = mesh.cell(5, 5, up);
        println!(
            "  {:>4} | {:>12.1} | {:?}",
            up,
            cell.pressure(),
            cell.cell_type()
        );
    }
    println!(
        "  (sea level reference: {} Pa)",
        water::SEA_LEVEL_PRESSURE_PASCALS
    );
    println!();
}

fn print_layer_stats(mesh: &Mesh) {
    let stats = scan_layer(mesh, 0, 0..CELLS_EAST, 0..CELLS_NORTH);
    println!("bottom layer scan ({} cells):", stats.pressure.count());
    if let (Some(min), Some(max)) = (stats.pressure.min(), stats.pressure.max()) {
        println!("  pressure: min {min:.1} Pa, max {max:.1} Pa");
    }
    if let (Some(min), Some(max)) = (stats.speed.min(), stats.speed.max()) {
        println!("  east-north speed: min {min:.3} m/s, max {max:.3} m/s");
    }
}
