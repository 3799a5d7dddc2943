use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use crate::material::Lambertian;
use crate::obj::Sphere;
use crate::scene::SceneBuilder;
use crate::types::Point3;

const AMBIENT: f64 = 0.2;

pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Light somewhere in front of the default camera, integer coordinates.
pub fn random_light<R: Rng + ?Sized>(rng: &mut R) -> Point3 {
    Point3::new(
        rng.gen_range(0..=9i32) as f64,
        rng.gen_range(-10..=10i32) as f64,
        rng.gen_range(-5..=5i32) as f64,
    )
}

pub fn random_sphere<R: Rng + ?Sized>(rng: &mut R) -> Sphere {
    let radius = rng.gen_range(1..=3i32) as f64;
    let mut coord = || rng.gen_range(-10..=10i32) as f64;
    let center = Point3::new(coord(), coord(), coord());
    let mut channel = || rng.gen_range(50..=254u8);
    let material = Lambertian::rgb(channel(), channel(), channel(), AMBIENT);
    Sphere::new(center, radius, material)
}

/// Moves the light and appends `count` spheres, all drawn from `rng`.
pub fn populate<R: Rng + ?Sized>(builder: &mut SceneBuilder, rng: &mut R, count: usize) {
    builder.set_light(random_light(rng));
    for _ in 0..count {
        builder.add_sphere(random_sphere(rng));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_scene() {
        let mut a = SceneBuilder::default();
        let mut b = SceneBuilder::default();
        populate(&mut a, &mut seeded(42), 10);
        populate(&mut b, &mut seeded(42), 10);
        assert_eq!(a, b);

        let mut c = SceneBuilder::default();
        populate(&mut c, &mut seeded(43), 10);
        assert_ne!(a, c);
    }

    #[test]
    fn values_stay_in_range() {
        let mut rng = seeded(7);
        for _ in 0..200 {
            let light = random_light(&mut rng);
            assert!((0.0..=9.0).contains(&light.x()));
            assert!((-10.0..=10.0).contains(&light.y()));
            assert!((-5.0..=5.0).contains(&light.z()));

            let sphere = random_sphere(&mut rng);
            assert!([1.0, 2.0, 3.0].contains(&sphere.radius()));
            let c = sphere.center();
            for v in [c.x(), c.y(), c.z()] {
                assert!((-10.0..=10.0).contains(&v));
                assert_eq!(v.fract(), 0.0);
            }
            let [r, g, b, a] = sphere.color().0;
            for ch in [r, g, b] {
                assert!((50..=254).contains(&ch));
            }
            assert_eq!(a, 255);
            assert_eq!(sphere.ambient(), AMBIENT);
        }
    }

    #[test]
    fn populated_scene_still_builds() {
        let mut builder = SceneBuilder::default();
        builder.set_image_size(16, 16);
        populate(&mut builder, &mut seeded(1), 10);
        assert_eq!(builder.spheres().len(), 10);
        assert!(builder.build().is_ok());
    }
}
