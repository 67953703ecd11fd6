//! A rectilinear ocean mesh evaluated lazily per cell query.
//!
//! The mesh holds no cell storage: every query recomputes the cell's
//! attributes from a pure [`physics::creator::CellCreator`], so concurrent
//! reads are safe without locking and boundary cells outside the configured
//! extents are ordinary queries rather than errors.

pub mod discretization;
pub mod physics;
pub mod processing;
