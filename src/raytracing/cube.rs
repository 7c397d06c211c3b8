use std::sync::Arc;

use super::core::{HitRecord, Hittable, Material};
use super::math::{rotate_y, Box3, Interval, Ray, Vec3, CUBE_ROTATION};

/// Cube turned by [`CUBE_ROTATION`] around the y axis passing through its center.
#[derive(Debug, Clone)]
pub struct RotatedCube {
    center: Vec3,
    half_extent: f64,
    material: Arc<Material>,
}

impl RotatedCube {
    pub fn new(center: Vec3, side: f64, material: Arc<Material>) -> RotatedCube {
        RotatedCube {
            center,
            half_extent: side * 0.5,
            material,
        }
    }

    /// The ray expressed in the unrotated frame where the cube is centered at the origin.
    fn to_local(&self, ray: &Ray) -> Ray {
        Ray::new(
            rotate_y(ray.origin - self.center, -CUBE_ROTATION),
            rotate_y(ray.direction, -CUBE_ROTATION),
        )
    }
}

impl Hittable for RotatedCube {
    fn hit(&self, ray: &Ray, interval: Interval) -> Option<HitRecord> {
        let local_ray = self.to_local(ray);
        let bounds = Box3::centered_cube(self.half_extent);
        let (tmin, tmax) = bounds.intersect_ray(&local_ray)?;

        // when the entry is rejected (origin inside or entry behind the window) try the exit
        let t = if interval.surrounds(tmin) {
            tmin
        } else if interval.surrounds(tmax) {
            tmax
        } else {
            return None;
        };

        let local_point = local_ray.at(t);
        let local_normal = bounds.outward_normal(local_point);

        let point = rotate_y(local_point, CUBE_ROTATION) + self.center;
        let outward_normal = rotate_y(local_normal, CUBE_ROTATION);
        Some(HitRecord::new(
            ray,
            t,
            point,
            outward_normal,
            self.material.clone(),
        ))
    }
}
