use super::{Ray, Vec3};

/// Tolerance used to decide on which face of the box a point lies.
pub const FACE_BIAS: f64 = 1e-4;

#[derive(Debug, Clone, Copy)]
pub struct Box3 {
    pub center: Vec3,
    pub half_extension: Vec3,
}

/// Bounds the ray parameter between the two planes of a single axis.
/// A zero direction gives infinite bounds, i.e. no constraint from this axis.
#[inline(always)]
fn slab(origin: f64, direction: f64, min: f64, max: f64) -> (f64, f64) {
    let inv_direction = 1.0 / direction;
    let t0 = (min - origin) * inv_direction;
    let t1 = (max - origin) * inv_direction;
    if inv_direction < 0.0 {
        (t1, t0)
    } else {
        (t0, t1)
    }
}

impl Box3 {
    /// Cube centered at the origin.
    pub fn centered_cube(half_extent: f64) -> Box3 {
        Box3 {
            center: Vec3::zero(),
            half_extension: Vec3::one() * half_extent,
        }
    }

    pub fn min(self: &Self) -> Vec3 {
        self.center - self.half_extension
    }

    pub fn max(self: &Self) -> Vec3 {
        self.center + self.half_extension
    }

    /// Parameters at which the ray enters and leaves the box, `None` when it misses.
    /// The range is not clipped to positive values: an origin inside the box
    /// gives a negative entry.
    pub fn intersect_ray(&self, ray: &Ray) -> Option<(f64, f64)> {
        let min = self.min();
        let max = self.max();
        let axes = [
            slab(ray.origin.x, ray.direction.x, min.x, max.x),
            slab(ray.origin.y, ray.direction.y, min.y, max.y),
            slab(ray.origin.z, ray.direction.z, min.z, max.z),
        ];

        let mut tmin = f64::NEG_INFINITY;
        let mut tmax = f64::INFINITY;
        for (t0, t1) in axes {
            tmin = tmin.max(t0);
            tmax = tmax.min(t1);
        }

        // the exit is not after the entry: the ray doesn't cross the box
        if tmax <= tmin {
            return None;
        }
        Some((tmin, tmax))
    }

    /// Outward unit normal of the face the point lies on.
    ///
    /// Faces are tested in the order +x, -x, +y, -y, +z, -z within [`FACE_BIAS`].
    /// When none matches, the face closest to the point is used, preferring x
    /// then y then z on ties.
    pub fn outward_normal(&self, point: Vec3) -> Vec3 {
        let p = point - self.center;
        let h = self.half_extension;
        if (p.x - h.x).abs() < FACE_BIAS {
            Vec3::x_axis()
        } else if (p.x + h.x).abs() < FACE_BIAS {
            -Vec3::x_axis()
        } else if (p.y - h.y).abs() < FACE_BIAS {
            Vec3::y_axis()
        } else if (p.y + h.y).abs() < FACE_BIAS {
            -Vec3::y_axis()
        } else if (p.z - h.z).abs() < FACE_BIAS {
            Vec3::z_axis()
        } else if (p.z + h.z).abs() < FACE_BIAS {
            -Vec3::z_axis()
        } else {
            self.nearest_face_normal(p)
        }
    }

    fn nearest_face_normal(&self, p: Vec3) -> Vec3 {
        let dx = self.half_extension.x - p.x.abs();
        let dy = self.half_extension.y - p.y.abs();
        let dz = self.half_extension.z - p.z.abs();
        if dx <= dy && dx <= dz {
            Vec3::x_axis() * p.x.signum()
        } else if dy <= dz {
            Vec3::y_axis() * p.y.signum()
        } else {
            Vec3::z_axis() * p.z.signum()
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn ray_through_the_center_enters_and_leaves() {
        let bbox = Box3::centered_cube(1.0);
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::z_axis());
        let (tmin, tmax) = bbox.intersect_ray(&ray).unwrap();
        assert_abs_diff_eq!(tmin, 4.0);
        assert_abs_diff_eq!(tmax, 6.0);
    }

    #[test]
    fn negative_direction_swaps_the_planes() {
        let bbox = Box3::centered_cube(1.0);
        let ray = Ray::new(Vec3::new(3.0, 0.5, 0.0), -Vec3::x_axis());
        let (tmin, tmax) = bbox.intersect_ray(&ray).unwrap();
        assert_abs_diff_eq!(tmin, 2.0);
        assert_abs_diff_eq!(tmax, 4.0);
    }

    #[test]
    fn parallel_ray_outside_a_slab_misses() {
        let bbox = Box3::centered_cube(1.0);
        let ray = Ray::new(Vec3::new(0.0, 2.0, -5.0), Vec3::z_axis());
        assert!(bbox.intersect_ray(&ray).is_none());
    }

    #[test]
    fn origin_inside_gives_a_negative_entry() {
        let bbox = Box3 {
            center: Vec3::new(1.0, 1.0, 1.0),
            half_extension: Vec3::one(),
        };
        let ray = Ray::new(Vec3::new(1.0, 1.0, 1.0), Vec3::y_axis());
        let (tmin, tmax) = bbox.intersect_ray(&ray).unwrap();
        assert_abs_diff_eq!(tmin, -1.0);
        assert_abs_diff_eq!(tmax, 1.0);
    }

    #[test]
    fn faces_are_tested_in_canonical_order() {
        let bbox = Box3::centered_cube(1.0);
        assert_eq!(bbox.outward_normal(Vec3::new(0.2, -1.0, 0.3)), -Vec3::y_axis());
        assert_eq!(bbox.outward_normal(Vec3::new(0.2, 0.1, 1.0)), Vec3::z_axis());
        // on the edge between +x and -z the x face comes first
        assert_eq!(bbox.outward_normal(Vec3::new(1.0, 0.0, -1.0)), Vec3::x_axis());
        // corner
        assert_eq!(bbox.outward_normal(Vec3::new(-1.0, 1.0, 1.0)), -Vec3::x_axis());
    }

    #[test]
    fn point_off_every_face_falls_back_to_the_nearest() {
        let bbox = Box3::centered_cube(1.0);
        assert_eq!(bbox.outward_normal(Vec3::new(0.1, -0.9, 0.2)), -Vec3::y_axis());
        assert_eq!(bbox.outward_normal(Vec3::new(0.1, 0.2, 0.95)), Vec3::z_axis());
    }

    #[test]
    fn fallback_ties_prefer_x_then_y() {
        let bbox = Box3::centered_cube(1.0);
        assert_eq!(bbox.outward_normal(Vec3::new(-0.5, 0.5, 0.0)), -Vec3::x_axis());
        assert_eq!(bbox.outward_normal(Vec3::new(0.0, 0.5, -0.5)), Vec3::y_axis());
    }
}
