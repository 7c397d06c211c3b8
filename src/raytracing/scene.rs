use std::sync::Arc;

use rand::{rngs::StdRng, Rng, SeedableRng};

use super::core::{HittableList, Material};
use super::cube::RotatedCube;
use super::math::Vec3;

const FLOOR_SIDE: f64 = 50.0;
const SMALL_CUBE_SIDE: f64 = 0.2;
const BIG_CUBE_SIDE: f64 = 1.0;
const GLASS_INDEX: f64 = 1.5;

/// Builds the demo world: a large floor cube, a grid of small random cubes
/// and three big cubes in the middle. The same seed always gives the same scene.
pub fn demo_scene(seed: u64) -> HittableList {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut world = HittableList::new();

    let floor_material = Arc::new(Material::plastic(Vec3::new(0.5, 0.5, 0.5)));
    world.add(RotatedCube::new(
        Vec3::new(0.0, -FLOOR_SIDE * 0.5, 0.0),
        FLOOR_SIDE,
        floor_material,
    ));

    // keep the spot in front of the metal cube free
    let clearing = Vec3::new(4.0, 0.2, 0.0);
    for a in -11..11 {
        for b in -11..11 {
            let choose_material: f64 = rng.gen();
            let center = Vec3::new(
                a as f64 + 0.9 * rng.gen::<f64>(),
                0.2,
                b as f64 + 0.9 * rng.gen::<f64>(),
            );
            if center.distance(clearing) <= 0.9 {
                continue;
            }

            let material = if choose_material < 0.8 {
                let albedo = Vec3::random(&mut rng, 0.0, 1.0) * Vec3::random(&mut rng, 0.0, 1.0);
                Material::plastic(albedo)
            } else if choose_material < 0.95 {
                let albedo = Vec3::random(&mut rng, 0.5, 1.0);
                let fuzz = rng.gen_range(0.0..0.5);
                Material::metal(albedo, fuzz)
            } else {
                Material::glass(GLASS_INDEX)
            };
            world.add(RotatedCube::new(center, SMALL_CUBE_SIDE, Arc::new(material)));
        }
    }

    let big_cubes = [
        (Vec3::new(0.0, 1.0, 0.0), Material::glass(GLASS_INDEX)),
        (
            Vec3::new(-4.0, 1.0, 0.0),
            Material::plastic(Vec3::new(0.4, 0.2, 0.1)),
        ),
        (
            Vec3::new(4.0, 1.0, 0.0),
            Material::metal(Vec3::new(0.7, 0.6, 0.5), 0.0),
        ),
    ];
    for (center, material) in big_cubes {
        world.add(RotatedCube::new(center, BIG_CUBE_SIDE, Arc::new(material)));
    }

    log::debug!("demo scene {} built with {} cubes", seed, world.len());
    world
}
