use std::path::{Path, PathBuf};
use image::RgbaImage;
use crate::error::{ExportError, SceneError};
use crate::export::{self, DEFAULT_FILE_NAME};
use crate::obj::Sphere;
use crate::renderer::render;
use crate::scene::SceneBuilder;
use crate::types::Point3;

/// Owns a scene description and the last image rendered from it.
///
/// Changing the scene never re-renders by itself; it only drops the previous
/// image so that an out of date picture cannot be exported.
#[derive(Clone, Debug, Default)]
pub struct RayTracer {
    builder: SceneBuilder,
    pixels: Option<RgbaImage>,
}

impl RayTracer {
    pub fn new(builder: SceneBuilder) -> Self {
        Self {
            builder,
            pixels: None,
        }
    }

    pub fn scene(&self) -> &SceneBuilder {
        &self.builder
    }

    pub fn is_valid(&self) -> bool {
        self.builder.is_valid()
    }

    pub fn change_light_location(&mut self, light: Point3) {
        self.builder.set_light(light);
        self.pixels = None;
    }

    pub fn change_camera_location(&mut self, camera: Point3) {
        self.builder.set_camera(camera);
        self.pixels = None;
    }

    pub fn change_target_location(&mut self, target: Point3) {
        self.builder.set_target(target);
        self.pixels = None;
    }

    pub fn add_shape(&mut self, sphere: Sphere) {
        self.builder.add_sphere(sphere);
        self.pixels = None;
    }

    pub fn render_scene(&mut self) -> Result<(), SceneError> {
        let scene = self.builder.build()?;
        self.pixels = Some(render(&scene));
        log::info!("Scene rendered, ready to export");
        Ok(())
    }

    pub fn pixels(&self) -> Option<&RgbaImage> {
        self.pixels.as_ref()
    }

    /// Row-major RGBA quadruples of the last render.
    pub fn rgba_bytes(&self) -> Option<&[u8]> {
        self.pixels.as_ref().map(|pixels| pixels.as_raw().as_slice())
    }

    /// Writes the last render to `path`, or to `scene.png` when no path is given.
    pub fn save_scene(&self, path: Option<&Path>) -> Result<PathBuf, ExportError> {
        if !self.is_valid() {
            log::warn!("Camera coincides with its target, not exporting");
            return Err(ExportError::InvalidScene);
        }
        let pixels = self.pixels.as_ref().ok_or(ExportError::NotRendered)?;

        let path = path.map_or_else(|| PathBuf::from(DEFAULT_FILE_NAME), Path::to_path_buf);
        export::save_image(pixels, &path)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> RayTracer {
        let mut builder = SceneBuilder::default();
        builder.set_image_size(8, 8);
        RayTracer::new(builder)
    }

    #[test]
    fn render_produces_flat_rgba() {
        let mut tracer = small();
        assert!(tracer.rgba_bytes().is_none());

        tracer.render_scene().unwrap();
        let bytes = tracer.rgba_bytes().unwrap();
        assert_eq!(bytes.len(), 8 * 8 * 4);
        assert!(bytes.chunks_exact(4).all(|p| p == [0, 0, 0, 255]));
    }

    #[test]
    fn mutators_discard_previous_render() {
        let mut tracer = small();
        tracer.render_scene().unwrap();

        tracer.change_light_location(Point3::new(1.0, 2.0, 3.0));
        assert!(tracer.pixels().is_none());
        assert!(matches!(tracer.save_scene(None), Err(ExportError::NotRendered)));

        tracer.render_scene().unwrap();
        tracer.add_shape(Sphere::default());
        assert!(tracer.pixels().is_none());
        assert_eq!(tracer.scene().spheres().len(), 1);
    }

    #[test]
    fn invalid_scene_refuses_render_and_export() {
        let mut tracer = small();
        tracer.change_camera_location(Point3::new(0.0, 1.0, 0.0));
        tracer.change_target_location(Point3::new(0.0, 2.0, 0.0));

        assert!(!tracer.is_valid());
        assert_eq!(tracer.render_scene(), Err(SceneError::CameraAtTarget));
        assert!(matches!(tracer.save_scene(None), Err(ExportError::InvalidScene)));
    }

    #[test]
    fn save_writes_requested_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("small.png");

        let mut tracer = small();
        tracer.render_scene().unwrap();
        assert_eq!(tracer.save_scene(Some(&path)).unwrap(), path);
        assert!(path.exists());
    }
}
