//! Ray casting of Lambertian spheres into an RGBA buffer.
//!
//! A [`SceneBuilder`] describes light, camera and spheres. [`SceneBuilder::build`]
//! turns it into an immutable [`Scene`] with one view ray per pixel, and
//! [`render`] shades that scene into a row-major [`image::RgbaImage`].
//! [`RayTracer`] wraps both steps together with file export.

pub mod camera;
pub mod config;
pub mod error;
pub mod export;
pub mod material;
pub mod obj;
pub mod random;
pub mod raytracer;
pub mod renderer;
pub mod scene;
pub mod types;
pub mod vector;

pub use crate::camera::{Camera, ViewRays};
pub use crate::config::SceneConfig;
pub use crate::error::{ConfigError, ExportError, GeometryError, SceneError};
pub use crate::material::Lambertian;
pub use crate::obj::Sphere;
pub use crate::raytracer::RayTracer;
pub use crate::renderer::render;
pub use crate::scene::{HitPolicy, Scene, SceneBuilder};
pub use crate::types::{Pixel, Point3, Ray};
pub use crate::vector::Vector3;
