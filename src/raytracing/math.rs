#[allow(non_snake_case)]
pub mod box3D;
pub mod interval;
pub mod ray;
pub mod rotation;
pub mod vec3;

pub use box3D::*;
pub use interval::*;
pub use ray::*;
pub use rotation::*;
pub use vec3::*;
