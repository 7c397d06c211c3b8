use std::sync::Arc;

use super::math::{Interval, Ray, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MaterialType {
    Plastic,
    Metal { fuzz: f64 },
    Glass { refraction_index: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub color: Vec3,
    pub type_: MaterialType,
}

impl Material {
    pub fn plastic(color: Vec3) -> Material {
        Material {
            color,
            type_: MaterialType::Plastic,
        }
    }

    pub fn metal(color: Vec3, fuzz: f64) -> Material {
        Material {
            color,
            type_: MaterialType::Metal {
                fuzz: fuzz.min(1.0),
            },
        }
    }

    pub fn glass(refraction_index: f64) -> Material {
        Material {
            color: Vec3::one(),
            type_: MaterialType::Glass { refraction_index },
        }
    }
}

#[derive(Clone, Debug)]
pub struct HitRecord {
    pub t: f64,
    pub point: Vec3,
    /// Unit normal, always facing against the incoming ray.
    pub normal: Vec3,
    pub material: Arc<Material>,
    /// True when the ray reached the surface from outside the solid.
    pub front_face: bool,
}

impl HitRecord {
    /// Builds the record orienting `outward_normal` against the ray direction.
    pub fn new(
        ray: &Ray,
        t: f64,
        point: Vec3,
        outward_normal: Vec3,
        material: Arc<Material>,
    ) -> HitRecord {
        let front_face = ray.direction.dot(outward_normal) < 0.0;
        let normal = if front_face {
            outward_normal
        } else {
            -outward_normal
        };
        HitRecord {
            t,
            point,
            normal,
            material,
            front_face,
        }
    }
}

pub trait Hittable: Send + Sync {
    /// Nearest intersection with a parameter strictly inside `interval`.
    fn hit(&self, ray: &Ray, interval: Interval) -> Option<HitRecord>;
}

#[derive(Default)]
pub struct HittableList {
    objects: Vec<Box<dyn Hittable>>,
}

impl HittableList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<H: Hittable + 'static>(&mut self, object: H) {
        self.objects.push(Box::new(object));
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Hittable for HittableList {
    fn hit(&self, ray: &Ray, interval: Interval) -> Option<HitRecord> {
        let mut closest_so_far = interval.max;
        let mut closest_hit = None;
        for object in &self.objects {
            // anything farther than the best hit is rejected by the object itself
            if let Some(record) = object.hit(ray, interval.with_max(closest_so_far)) {
                closest_so_far = record.t;
                closest_hit = Some(record);
            }
        }
        closest_hit
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use rayon::prelude::*;

    use crate::raytracing::cube::RotatedCube;
    use super::*;

    fn material(r: f64) -> Arc<Material> {
        Arc::new(Material::plastic(Vec3::new(r, 0.0, 0.0)))
    }

    /// Three cubes along the z axis, only the first two on the ray path.
    fn row_of_cubes() -> (HittableList, RotatedCube, Arc<Material>) {
        let near_material = material(0.1);
        let near = RotatedCube::new(Vec3::new(0.0, 0.0, 0.0), 1.0, near_material.clone());
        let mut list = HittableList::new();
        list.add(RotatedCube::new(Vec3::new(0.0, 0.0, 6.0), 1.0, material(0.2)));
        list.add(RotatedCube::new(Vec3::new(4.0, 0.0, 3.0), 1.0, material(0.3)));
        list.add(near.clone());
        (list, near, near_material)
    }

    #[test]
    fn empty_list_never_hits() {
        let list = HittableList::new();
        assert!(list.is_empty());
        let ray = Ray::new(Vec3::zero(), Vec3::z_axis());
        assert!(list.hit(&ray, Interval::from_min(0.001)).is_none());
    }

    #[test]
    fn list_returns_the_nearest_cube() {
        let (list, near, near_material) = row_of_cubes();
        assert_eq!(list.len(), 3);
        let ray = Ray::new(Vec3::new(0.0, 0.0, -10.0), Vec3::z_axis());
        let interval = Interval::from_min(0.001);

        let direct = near.hit(&ray, interval).unwrap();
        let record = list.hit(&ray, interval).unwrap();
        assert!(Arc::ptr_eq(&record.material, &near_material));
        assert_abs_diff_eq!(record.t, direct.t);
        assert_abs_diff_eq!(record.t, 10.0 - 0.5 * 2f64.sqrt(), epsilon = 1e-9);
    }

    #[test]
    fn narrowed_interval_skips_the_nearest_cube() {
        let (list, _, near_material) = row_of_cubes();
        let ray = Ray::new(Vec3::new(0.0, 0.0, -10.0), Vec3::z_axis());
        // starting past the first cube only the far one is left
        let record = list.hit(&ray, Interval::from_min(11.0)).unwrap();
        assert!(!Arc::ptr_eq(&record.material, &near_material));
        assert_abs_diff_eq!(record.t, 16.0 - 0.5 * 2f64.sqrt(), epsilon = 1e-9);
    }

    #[test]
    fn upper_bound_is_respected() {
        let (list, _, _) = row_of_cubes();
        let ray = Ray::new(Vec3::new(0.0, 0.0, -10.0), Vec3::z_axis());
        assert!(list.hit(&ray, Interval::new(0.001, 5.0)).is_none());
    }

    #[test]
    fn lists_can_be_nested() {
        let (inner, near, _) = row_of_cubes();
        let mut outer = HittableList::new();
        outer.add(inner);
        let ray = Ray::new(Vec3::new(0.0, 0.0, -10.0), Vec3::z_axis());
        let interval = Interval::from_min(0.001);
        assert_abs_diff_eq!(
            outer.hit(&ray, interval).unwrap().t,
            near.hit(&ray, interval).unwrap().t
        );
    }

    #[test]
    fn concurrent_queries_match_sequential_ones() {
        let (list, _, _) = row_of_cubes();
        let rays: Vec<Ray> = (0..256)
            .map(|i| {
                let x = (i % 16) as f64 * 0.1 - 0.8;
                let y = (i / 16) as f64 * 0.1 - 0.8;
                Ray::new(Vec3::new(x, y, -10.0), Vec3::new(0.01 * x, 0.0, 1.0))
            })
            .collect();
        let interval = Interval::from_min(0.001);

        let sequential: Vec<Option<f64>> = rays
            .iter()
            .map(|ray| list.hit(ray, interval).map(|record| record.t))
            .collect();
        let parallel: Vec<Option<f64>> = rays
            .par_iter()
            .map(|ray| list.hit(ray, interval).map(|record| record.t))
            .collect();
        assert_eq!(sequential, parallel);
        assert!(sequential.iter().any(Option::is_some));
    }

    #[test]
    fn back_face_hit_flips_the_normal() {
        let ray = Ray::new(Vec3::zero(), Vec3::x_axis());
        let record = HitRecord::new(&ray, 1.0, Vec3::x_axis(), Vec3::x_axis(), material(0.5));
        assert!(!record.front_face);
        assert_eq!(record.normal, -Vec3::x_axis());
    }
}
