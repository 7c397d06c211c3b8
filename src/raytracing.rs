pub mod camera;
pub mod core;
pub mod cube;
pub mod math;
pub mod scene;
