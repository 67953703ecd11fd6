pub mod mesh;
pub mod vector;
