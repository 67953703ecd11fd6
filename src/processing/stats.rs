use std::ops::Range;

use crate::discretization::mesh::Mesh;

/// Online min/max accumulator over a scalar stream.
///
/// Not synchronized; concurrent writers should keep one accumulator each
/// and merge the results afterwards.
#[derive(Clone, Debug)]
pub struct Statistics {
    count: u64,
    min: f64,
    max: f64,
}

impl Default for Statistics {
    fn default() -> Self {
        Self::new()
    }
}

impl Statistics {
    pub fn new() -> Self {
        Self {
            count: 0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    pub fn add(&mut self, value: f64) {
        self.count += 1;
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    /// Running minimum, or `None` before the first `add`.
    pub fn min(&self) -> Option<f64> {
        (self.count > 0).then_some(self.min)
    }

    /// Running maximum, or `None` before the first `add`.
    pub fn max(&self) -> Option<f64> {
        (self.count > 0).then_some(self.max)
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// max - min, or `None` while empty. A zero range means every observed
    /// value was identical; callers normalizing by it must guard the
    /// division themselves.
    pub fn range(&self) -> Option<f64> {
        self.max().zip(self.min()).map(|(max, min)| max - min)
    }
}

/// Extrema gathered from one horizontal layer: the same pass a renderer
/// makes before normalizing pressure shades and velocity arrows.
pub struct LayerStats {
    pub pressure: Statistics,
    pub speed: Statistics,
}

/// Scan one horizontal layer of the mesh, accumulating pressure and the
/// east-north speed of every cell in the given index ranges.
pub fn scan_layer(mesh: &Mesh, up: i64, east: Range<i64>, north: Range<i64>) -> LayerStats {
    let mut pressure = Statistics::new();
    let mut speed = Statistics::new();
    for east in east {
        for north in north.clone() {
            let cell = mesh.cell(east, north, up);
            pressure.add(cell.pressure());
            speed.add(cell.velocity().magnitude_east_north());
        }
    }
    LayerStats { pressure, speed }
}
