pub mod creator;
pub mod water;
