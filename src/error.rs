use std::path::PathBuf;
use thiserror::Error;

/// Degenerate vector math: a value that cannot be normalized or measured.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    #[error("vector has zero length")]
    ZeroLength,

    #[error("vector norm is not finite")]
    NonFinite,

    #[error("arccosine argument outside of [-1, 1]")]
    OutOfDomain,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("camera and target coincide on the x and z axes")]
    CameraAtTarget,

    #[error("image must be larger than 1x1 on both axes, got {width}x{height}")]
    ImageTooSmall { width: u32, height: u32 },

    #[error("viewport dimensions must be positive, got {width}x{height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("sphere #{index} is invalid: {reason}")]
    InvalidSphere { index: usize, reason: &'static str },

    #[error("degenerate camera geometry: {0}")]
    DegenerateGeometry(#[from] GeometryError),
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("scene is not renderable, refusing to export")]
    InvalidScene,

    #[error("scene has not been rendered since the last change")]
    NotRendered,

    #[error("unsupported image format for {0:?}")]
    UnsupportedFormat(PathBuf),

    #[error("image encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read scene file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scene file: {0}")]
    Parse(#[from] toml::de::Error),
}
