use super::math::{Ray, Vec3};

pub struct Camera {
    forward: Vec3,
    up: Vec3,
    right: Vec3,
    position: Vec3,
    zoom: f64,
    aspect_ratio: f64,
}

impl Camera {
    /// Creates a camera that looks at a specific point from a specific position.
    /// The point is referred to be the center of the screen, `vfov` is the vertical
    /// field of view in degrees.
    pub fn look_at(position: Vec3, point: Vec3, vfov: f64, aspect_ratio: f64) -> Self {
        let world_up = Vec3::y_axis();
        let forward = (point - position).normalize();
        let right = forward.cross(world_up).normalize();
        // to get an orthonormal base, we should calculate the up vector with two perpendicular vectors
        let up = right.cross(forward).normalize();
        // the screen spans one unit vertically
        let zoom = 0.5 / (vfov.to_radians() * 0.5).tan();
        Self {
            forward,
            up,
            right,
            position,
            zoom,
            aspect_ratio,
        }
    }

    /// Create a ray from the camera position to the relative uv coordinate on his screen.
    /// Both coordinates go from -0.5 to 0.5, v grows upward.
    pub fn shoot_to(&self, u: f64, v: f64) -> Ray {
        let direction =
            self.forward * self.zoom + self.up * v + self.right * (u * self.aspect_ratio);
        Ray {
            origin: self.position,
            direction: direction.normalize(),
        }
    }
}
