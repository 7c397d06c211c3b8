use std::f64::consts::FRAC_PI_4;

use super::Vec3;

/// Rotation every cube is built with, around the world y axis.
pub const CUBE_ROTATION: f64 = FRAC_PI_4;

/// Rotates `v` by `angle` radians around the y axis, the y component is left untouched.
#[inline(always)]
pub fn rotate_y(v: Vec3, angle: f64) -> Vec3 {
    let (sin_t, cos_t) = angle.sin_cos();
    Vec3::new(
        v.x * cos_t + v.z * sin_t,
        v.y,
        -v.x * sin_t + v.z * cos_t,
    )
}
