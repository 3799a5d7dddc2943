use serde::{Deserialize, Serialize};
use crate::camera::{Camera, ViewRays};
use crate::error::SceneError;
use crate::obj::Sphere;
use crate::types::{Pixel, Point3, BLACK};

/// Which sphere a view ray is shaded against when several are struck.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HitPolicy {
    /// The first sphere in insertion order that the ray line crosses, wherever it lies.
    #[default]
    FirstListed,
    /// The closest sphere surface in front of the camera, including the inside
    /// of a sphere that encloses it.
    Nearest,
}

/// Editable scene description. Nothing is computed until [`SceneBuilder::build`].
#[derive(Clone, Debug, PartialEq)]
pub struct SceneBuilder {
    light: Point3,
    camera: Camera,
    spheres: Vec<Sphere>,
    background: Pixel,
    hit_policy: HitPolicy,
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self::new(
            Point3::new(0.0, 10.0, 0.0),
            Camera {
                position: Point3::new(5.0, 0.0, 0.0),
                target: Point3::ZERO,
                image_width: 1024,
                image_height: 1024,
                viewport_width: 5.0,
                viewport_height: 5.0,
            },
            Vec::new(),
            BLACK,
        )
    }
}

impl SceneBuilder {
    pub fn new(light: Point3, camera: Camera, spheres: Vec<Sphere>, background: Pixel) -> Self {
        Self {
            light,
            camera,
            spheres,
            background,
            hit_policy: HitPolicy::default(),
        }
    }

    pub fn light(&self) -> Point3 {
        self.light
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn background(&self) -> Pixel {
        self.background
    }

    pub fn hit_policy(&self) -> HitPolicy {
        self.hit_policy
    }

    pub fn set_light(&mut self, light: Point3) -> &mut Self {
        self.light = light;
        self
    }

    pub fn set_camera(&mut self, position: Point3) -> &mut Self {
        self.camera.position = position;
        self
    }

    pub fn set_target(&mut self, target: Point3) -> &mut Self {
        self.camera.target = target;
        self
    }

    pub fn set_image_size(&mut self, width: u32, height: u32) -> &mut Self {
        self.camera.image_width = width;
        self.camera.image_height = height;
        self
    }

    pub fn set_viewport(&mut self, width: f64, height: f64) -> &mut Self {
        self.camera.viewport_width = width;
        self.camera.viewport_height = height;
        self
    }

    pub fn set_background(&mut self, background: Pixel) -> &mut Self {
        self.background = background;
        self
    }

    pub fn set_hit_policy(&mut self, hit_policy: HitPolicy) -> &mut Self {
        self.hit_policy = hit_policy;
        self
    }

    pub fn add_sphere(&mut self, sphere: Sphere) -> &mut Self {
        self.spheres.push(sphere);
        self
    }

    pub fn is_valid(&self) -> bool {
        self.camera.is_valid()
    }

    /// Validates the description and computes the view rays for it.
    pub fn build(&self) -> Result<Scene, SceneError> {
        self.camera.check()?;
        for (index, sphere) in self.spheres.iter().enumerate() {
            sphere.validate(index)?;
        }

        let view_rays = self.camera.view_rays()?;
        log::debug!(
            "Built {}x{} scene with {} sphere(s), light at {}",
            view_rays.width(),
            view_rays.height(),
            self.spheres.len(),
            self.light
        );

        Ok(Scene {
            light: self.light,
            camera: self.camera,
            spheres: self.spheres.clone(),
            background: self.background,
            hit_policy: self.hit_policy,
            view_rays,
        })
    }
}

/// Render-ready snapshot of a [`SceneBuilder`]. View rays always match the camera.
#[derive(Clone, Debug)]
pub struct Scene {
    light: Point3,
    camera: Camera,
    spheres: Vec<Sphere>,
    background: Pixel,
    hit_policy: HitPolicy,
    view_rays: ViewRays,
}

impl Scene {
    pub fn light(&self) -> Point3 {
        self.light
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn background(&self) -> Pixel {
        self.background
    }

    pub fn hit_policy(&self) -> HitPolicy {
        self.hit_policy
    }

    pub fn view_rays(&self) -> &ViewRays {
        &self.view_rays
    }

    pub fn width(&self) -> u32 {
        self.view_rays.width()
    }

    pub fn height(&self) -> u32 {
        self.view_rays.height()
    }
}
