use std::path::Path;
use image::Rgba;
use serde::{Deserialize, Serialize};
use crate::camera::Camera;
use crate::error::ConfigError;
use crate::material::Lambertian;
use crate::obj::Sphere;
use crate::scene::{HitPolicy, SceneBuilder};
use crate::types::Point3;

/// Scene description as read from a TOML file. Missing keys take the default scene's values.
///
/// ```toml
/// light = [0.0, 10.0, 0.0]
/// camera = [12.0, 0.0, 0.0]
/// target = [0.0, 0.0, 0.0]
/// background = [0, 0, 0, 255]
/// hit-policy = "first-listed"
///
/// [image]
/// width = 640
/// height = 480
///
/// [viewport]
/// width = 4.0
/// height = 3.0
///
/// [[sphere]]
/// radius = 2.0
/// center = [0.0, 0.0, 0.0]
/// color = [255, 0, 0]
/// ambient = 0.1
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct SceneConfig {
    pub light: Point3,
    pub camera: Point3,
    pub target: Point3,
    pub background: [u8; 4],
    pub hit_policy: HitPolicy,
    pub image: ImageConfig,
    pub viewport: ViewportConfig,
    #[serde(rename = "sphere")]
    pub spheres: Vec<SphereConfig>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImageConfig {
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewportConfig {
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SphereConfig {
    pub radius: f64,
    pub center: Point3,
    pub color: [u8; 3],
    pub ambient: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::from(&SceneBuilder::default())
    }
}

impl Default for ImageConfig {
    fn default() -> Self {
        SceneConfig::default().image
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        SceneConfig::default().viewport
    }
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self::from(&Sphere::default())
    }
}

impl From<&Sphere> for SphereConfig {
    fn from(sphere: &Sphere) -> Self {
        let [r, g, b, _] = sphere.color().0;
        Self {
            radius: sphere.radius(),
            center: sphere.center(),
            color: [r, g, b],
            ambient: sphere.ambient(),
        }
    }
}

impl From<SphereConfig> for Sphere {
    fn from(config: SphereConfig) -> Self {
        let [r, g, b] = config.color;
        Sphere::new(config.center, config.radius, Lambertian::rgb(r, g, b, config.ambient))
    }
}

impl From<&SceneBuilder> for SceneConfig {
    fn from(builder: &SceneBuilder) -> Self {
        let camera = builder.camera();
        Self {
            light: builder.light(),
            camera: camera.position,
            target: camera.target,
            background: builder.background().0,
            hit_policy: builder.hit_policy(),
            image: ImageConfig {
                width: camera.image_width,
                height: camera.image_height,
            },
            viewport: ViewportConfig {
                width: camera.viewport_width,
                height: camera.viewport_height,
            },
            spheres: builder.spheres().iter().map(SphereConfig::from).collect(),
        }
    }
}

impl SceneConfig {
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&text)?;
        log::debug!("Loaded {} sphere(s) from {}", config.spheres.len(), path.display());
        Ok(config)
    }

    pub fn into_builder(self) -> SceneBuilder {
        let camera = Camera {
            position: self.camera,
            target: self.target,
            image_width: self.image.width,
            image_height: self.image.height,
            viewport_width: self.viewport.width,
            viewport_height: self.viewport.height,
        };
        let spheres = self.spheres.into_iter().map(Sphere::from).collect();

        let mut builder = SceneBuilder::new(self.light, camera, spheres, Rgba(self.background));
        builder.set_hit_policy(self.hit_policy);
        builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_the_default_scene() {
        let config = SceneConfig::from_toml("").unwrap();
        assert_eq!(config, SceneConfig::default());
        assert_eq!(config.into_builder(), SceneBuilder::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = SceneConfig::from_toml(
            r#"
            camera = [10.0, 1.0, 0.0]
            hit-policy = "nearest"

            [image]
            width = 320

            [[sphere]]
            radius = 2.5
            color = [0, 128, 255]

            [[sphere]]
            center = [0.0, -6.0, 0.0]
            "#,
        )
        .unwrap();

        assert_eq!(config.camera, Point3::new(10.0, 1.0, 0.0));
        assert_eq!(config.target, Point3::ZERO);
        assert_eq!(config.image, ImageConfig { width: 320, height: 1024 });
        assert_eq!(config.hit_policy, HitPolicy::Nearest);

        let builder = config.into_builder();
        let spheres = builder.spheres();
        assert_eq!(spheres.len(), 2);
        assert_eq!(spheres[0].radius(), 2.5);
        assert_eq!(spheres[0].color(), Rgba([0, 128, 255, 255]));
        assert_eq!(spheres[0].ambient(), 0.2);
        assert_eq!(spheres[1].center(), Point3::new(0.0, -6.0, 0.0));
        assert_eq!(spheres[1].color(), Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn unknown_keys_are_errors() {
        assert!(matches!(
            SceneConfig::from_toml("lights = [0.0, 1.0, 2.0]"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            SceneConfig::from_toml("camera = [1.0, 2.0]"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            SceneConfig::load(&dir.path().join("nope.toml")),
            Err(ConfigError::Io(_))
        ));
    }
}
