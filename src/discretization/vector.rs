use std::ops::{Add, Mul, Sub};

use glam::{DVec2, DVec3};

/// One axis of the mesh coordinate frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    East,
    North,
    Up,
}

/// An immutable 3-component vector in (east, north, up) order.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector {
    pub east: f64,
    pub north: f64,
    pub up: f64,
}

impl Vector {
    /// The canonical zero vector.
    pub const ZERO: Vector = Vector {
        east: 0.0,
        north: 0.0,
        up: 0.0,
    };

    pub fn new(east: f64, north: f64, up: f64) -> Self {
        Self { east, north, up }
    }

    pub fn component(&self, axis: Axis) -> f64 {
        match axis {
            Axis::East => self.east,
            Axis::North => self.north,
            Axis::Up => self.up,
        }
    }

    /// Planar magnitude over any two of the three axes.
    pub fn magnitude(&self, a: Axis, b: Axis) -> f64 {
        DVec2::new(self.component(a), self.component(b)).length()
    }

    /// Horizontal speed: the magnitude over the east-north plane.
    pub fn magnitude_east_north(&self) -> f64 {
        self.magnitude(Axis::East, Axis::North)
    }

    pub fn dot(&self, other: Vector) -> f64 {
        DVec3::from(*self).dot(other.into())
    }
}

impl From<DVec3> for Vector {
    fn from(v: DVec3) -> Self {
        Vector::new(v.x, v.y, v.z)
    }
}

impl From<Vector> for DVec3 {
    fn from(v: Vector) -> Self {
        DVec3::new(v.east, v.north, v.up)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.east + rhs.east, self.north + rhs.north, self.up + rhs.up)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.east - rhs.east, self.north - rhs.north, self.up - rhs.up)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        Vector::new(self.east * rhs, self.north * rhs, self.up * rhs)
    }
}
