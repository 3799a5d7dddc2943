use crate::error::{GeometryError, SceneError};
use crate::material::Lambertian;
use crate::types::{Pixel, Point3, Ray};
use crate::vector::Vector3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    center: Point3,
    radius: f64,
    material: Lambertian,
}

impl Sphere {
    pub fn new(center: Point3, radius: f64, material: Lambertian) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn center(&self) -> Point3 {
        self.center
    }

    pub fn material(&self) -> &Lambertian {
        &self.material
    }

    pub fn color(&self) -> Pixel {
        self.material.color()
    }

    pub fn ambient(&self) -> f64 {
        self.material.ambient()
    }

    /// Signed distance along `ray` to the nearer root of the ray/sphere quadratic.
    ///
    /// `ray.direction` must be a unit vector. The root is not clamped to `t >= 0`,
    /// so a sphere behind the origin still reports a (negative) distance.
    pub fn intersect_distance(&self, ray: &Ray) -> Option<f64> {
        self.intersect_distances(ray).map(|(near, _)| near)
    }

    /// Both signed roots of the ray/sphere quadratic, nearer first.
    pub fn intersect_distances(&self, ray: &Ray) -> Option<(f64, f64)> {
        let v = ray.origin - self.center;
        let vd = v.dot(ray.direction);
        let discriminant = vd * vd - (v.dot(v) - self.radius * self.radius);

        // also rejects NaN
        if !(discriminant > 0.0) {
            return None;
        }

        let root = discriminant.sqrt();
        Some((-vd - root, -vd + root))
    }

    pub fn intersect(&self, ray: &Ray) -> Option<Point3> {
        self.intersect_distance(ray).map(|t| ray.at(t))
    }

    /// Outward unit normal at a point on the surface.
    pub fn normal(&self, point: Point3) -> Result<Vector3, GeometryError> {
        (point - self.center).normalize()
    }

    pub(crate) fn validate(&self, index: usize) -> Result<(), SceneError> {
        if !self.center.is_finite() {
            return Err(SceneError::InvalidSphere {
                index,
                reason: "center is not finite",
            });
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(SceneError::InvalidSphere {
                index,
                reason: "radius must be positive",
            });
        }
        if !(0.0..=1.0).contains(&self.ambient()) {
            return Err(SceneError::InvalidSphere {
                index,
                reason: "ambient must lie within [0, 1]",
            });
        }
        Ok(())
    }
}

impl Default for Sphere {
    /// Red unit sphere at the origin.
    fn default() -> Self {
        Self::new(Point3::ZERO, 1.0, Lambertian::rgb(255, 0, 0, 0.2))
    }
}
