use image::RgbaImage;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use crate::material::incident_light;
use crate::obj::Sphere;
use crate::scene::{HitPolicy, Scene};
use crate::types::{Pixel, Point3, Ray};
use crate::vector::Vector3;

/// Finds the sphere a ray is shaded against, along with the struck point.
pub fn find_hit<'a>(
    spheres: &'a [Sphere],
    ray: &Ray,
    policy: HitPolicy,
) -> Option<(&'a Sphere, Point3)> {
    match policy {
        HitPolicy::FirstListed => spheres.iter().find_map(|sphere| {
            sphere
                .intersect(ray)
                .filter(|point| point.is_finite())
                .map(|point| (sphere, point))
        }),
        HitPolicy::Nearest => spheres
            .iter()
            .filter_map(|sphere| {
                // a camera inside the sphere sees the far side
                let (near, far) = sphere.intersect_distances(ray)?;
                [near, far]
                    .into_iter()
                    .find(|t| *t >= 0.0)
                    .map(|t| (sphere, t))
            })
            // min_by keeps the earliest sphere on ties
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(sphere, t)| (sphere, ray.at(t))),
    }
}

/// Lambertian color of `sphere` at `point` lit from `light`.
pub fn shade(sphere: &Sphere, point: Point3, light: Point3) -> Pixel {
    let incident = match ((light - point).normalize(), sphere.normal(point)) {
        (Ok(light_direction), Ok(normal)) => incident_light(light_direction, normal),
        (Err(e), _) | (_, Err(e)) => {
            log::trace!("Unlit hit at {}: {}", point, e);
            0.0
        }
    };
    sphere.material().shade(incident)
}

pub fn trace(scene: &Scene, direction: Vector3) -> Pixel {
    let ray = Ray::new(scene.camera().position, direction);
    match find_hit(scene.spheres(), &ray, scene.hit_policy()) {
        Some((sphere, point)) => shade(sphere, point, scene.light()),
        None => scene.background(),
    }
}

/// Shades every view ray of `scene` into a fresh row-major RGBA buffer.
pub fn render(scene: &Scene) -> RgbaImage {
    let start = std::time::Instant::now();

    let mut image = RgbaImage::new(scene.width(), scene.height());
    let rays = scene.view_rays().as_slice();
    let data: &mut [u8] = &mut image;

    #[cfg(feature = "parallel")]
    data.par_chunks_exact_mut(4)
        .zip(rays.par_iter())
        .for_each(|(pixel, direction)| pixel.copy_from_slice(&trace(scene, *direction).0));
    #[cfg(not(feature = "parallel"))]
    data.chunks_exact_mut(4)
        .zip(rays.iter())
        .for_each(|(pixel, direction)| pixel.copy_from_slice(&trace(scene, *direction).0));

    log::info!(
        "Rendered {}x{} scene in {:?}",
        scene.width(),
        scene.height(),
        start.elapsed()
    );
    image
}
