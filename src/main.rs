use std::time::Instant;

use anyhow::Context;
use image::{ImageBuffer, Rgb};
use rand::{self, Rng};

use clap::Parser;

mod raytracing;
use raytracing::camera::Camera;
use raytracing::core::{HitRecord, Hittable, MaterialType};
use raytracing::math::{Interval, Ray, Vec3};
use raytracing::scene::demo_scene;

/// Smallest accepted ray parameter, avoids self intersections (shadow acne).
const T_MIN: f64 = 0.001;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// the path where is saved the rendered image, the format follows the extension
    #[arg(short, long, default_value = "output.png")]
    output: String,
    /// the width of the image in pixels
    #[arg(short, long, default_value_t = 400, value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,
    /// the ratio between width and height of the image
    #[arg(long, default_value_t = 16.0 / 9.0)]
    aspect_ratio: f64,
    /// the number of ray shooted per pixel
    #[arg(short, long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    sample_rate: u32,
    /// the maximum number of bounces of a single ray
    #[arg(short = 'd', long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(1..))]
    max_depth: u32,
    /// the seed used to place the cubes of the demo scene
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// apply gamma correction to the final image
    #[arg(long, default_value = "false")]
    gamma_correction: bool,
}

impl From<Vec3> for image::Rgb<u8> {
    fn from(value: Vec3) -> Self {
        let intensity = Interval::new(0.0, 0.999);
        let r = (intensity.clamp(value.x) * 256.0) as u8;
        let g = (intensity.clamp(value.y) * 256.0) as u8;
        let b = (intensity.clamp(value.z) * 256.0) as u8;
        image::Rgb([r, g, b])
    }
}

fn gamma_correction(value: f64) -> f64 {
    if value > 0.0 {
        value.powf(1.0 / 2.2)
    } else {
        0.0
    }
}

/// Schlick approximation of the reflectance of a dielectric.
fn reflectance(cosine: f64, refraction_ratio: f64) -> f64 {
    let r0 = ((1.0 - refraction_ratio) / (1.0 + refraction_ratio)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}

/// Bounces the ray on the hit surface, returns the attenuation and the new ray,
/// `None` when the ray is absorbed.
fn scatter<R: Rng + ?Sized>(ray: &Ray, hit: &HitRecord, rng: &mut R) -> Option<(Vec3, Ray)> {
    let material = &hit.material;
    let direction = match material.type_ {
        MaterialType::Plastic => {
            let direction = hit.normal + Vec3::random_unit_vector(rng);
            // the random vector may cancel the normal out
            if direction.near_zero() {
                hit.normal
            } else {
                direction
            }
        }
        MaterialType::Metal { fuzz } => {
            let reflected = ray.direction.normalize().reflect(hit.normal);
            let direction = reflected + Vec3::random_unit_vector(rng) * fuzz;
            // scattered below the surface
            if direction.dot(hit.normal) <= 0.0 {
                return None;
            }
            direction
        }
        MaterialType::Glass { refraction_index } => {
            let ratio = if hit.front_face {
                1.0 / refraction_index
            } else {
                refraction_index
            };
            let unit_direction = ray.direction.normalize();
            let cos_theta = (-unit_direction).dot(hit.normal).min(1.0);
            let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();
            let cannot_refract = ratio * sin_theta > 1.0;
            if cannot_refract || reflectance(cos_theta, ratio) > rng.gen::<f64>() {
                unit_direction.reflect(hit.normal)
            } else {
                unit_direction.refract(hit.normal, ratio)
            }
        }
    };
    Some((material.color, Ray::new(hit.point, direction)))
}

fn sky(ray: &Ray) -> Vec3 {
    let a = 0.5 * (ray.direction.normalize().y + 1.0);
    Vec3::one() * (1.0 - a) + Vec3::new(0.5, 0.7, 1.0) * a
}

fn cast<R: Rng + ?Sized>(world: &dyn Hittable, ray: &Ray, max_depth: u32, rng: &mut R) -> Vec3 {
    let mut attenuation = Vec3::one();
    let mut current_ray = *ray;
    for _ in 0..max_depth {
        let Some(hit) = world.hit(&current_ray, Interval::from_min(T_MIN)) else {
            return attenuation * sky(&current_ray);
        };
        match scatter(&current_ray, &hit, rng) {
            Some((color, bounced)) => {
                // attenuate the next bounced ray by the material color
                attenuation *= color;
                current_ray = bounced;
            }
            None => return Vec3::zero(),
        }
    }
    // out of bounces, no more light is gathered
    Vec3::zero()
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let width = args.width;
    let height = ((width as f64 / args.aspect_ratio) as u32).max(1);

    let world = demo_scene(args.seed);
    log::info!("demo scene with seed {}: {} cubes", args.seed, world.len());

    let camera = Camera::look_at(
        Vec3::new(13.0, 2.0, 3.0),
        Vec3::zero(),
        20.0,
        width as f64 / height as f64,
    );

    log::info!(
        "rendering {}x{} with {} samples per pixel, max depth {}",
        width,
        height,
        args.sample_rate,
        args.max_depth
    );
    // measure time
    let start = Instant::now();
    let mut rng = rand::thread_rng();
    let mut pixels = vec![Vec3::zero(); (width * height) as usize];
    for y in 0..height {
        for x in 0..width {
            let vpixel = &mut pixels[(x + width * y) as usize];
            for _ in 0..args.sample_rate {
                let x_offset = rng.gen_range(-0.5..0.5);
                let y_offset = rng.gen_range(-0.5..0.5);
                // getting pixel ray coordinate, image rows go downward
                let u = (x as f64 + x_offset - (width as f64) * 0.5) / (width as f64);
                let v = -(y as f64 + y_offset - (height as f64) * 0.5) / (height as f64);

                let ray = camera.shoot_to(u, v);
                *vpixel += cast(&world, &ray, args.max_depth, &mut rng) / (args.sample_rate as f64);
            }
        }
        log::debug!("row {}/{} done", y + 1, height);
    }

    let mut buffer: ImageBuffer<Rgb<u8>, Vec<_>> = ImageBuffer::new(width, height);

    // write the raytracing result into the ImageBuffer
    for (x, y, pixel) in buffer.enumerate_pixels_mut() {
        let idx = (x + width * y) as usize;
        let mut p = pixels[idx];
        if args.gamma_correction {
            p.x = gamma_correction(p.x);
            p.y = gamma_correction(p.y);
            p.z = gamma_correction(p.z);
        }
        *pixel = p.into();
    }

    let total_time = start.elapsed();
    log::info!("Rendered {} in {:?}", args.output, total_time);

    buffer
        .save(&args.output)
        .with_context(|| format!("failed to save the image to {}", args.output))?;
    Ok(())
}
