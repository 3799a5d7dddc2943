use std::path::Path;
use image::{DynamicImage, ImageFormat, RgbaImage};
use crate::error::ExportError;

pub const DEFAULT_FILE_NAME: &str = "scene.png";

/// Encodes `image` in the format named by the file extension of `path`.
///
/// PNG keeps the alpha channel, JPEG drops it.
pub fn save_image(image: &RgbaImage, path: &Path) -> Result<(), ExportError> {
    match ImageFormat::from_path(path) {
        Ok(ImageFormat::Png) => image.save_with_format(path, ImageFormat::Png)?,
        Ok(ImageFormat::Jpeg) => DynamicImage::ImageRgba8(image.clone())
            .to_rgb8()
            .save_with_format(path, ImageFormat::Jpeg)?,
        _ => return Err(ExportError::UnsupportedFormat(path.to_path_buf())),
    }

    log::info!("Scene was saved as {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use image::Rgba;
    use super::*;

    fn checker() -> RgbaImage {
        RgbaImage::from_fn(4, 3, |x, y| {
            if (x + y) % 2 == 0 {
                Rgba([255, 0, 0, 255])
            } else {
                Rgba([0, 0, 255, 128])
            }
        })
    }

    #[test]
    fn png_keeps_rgba() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");

        save_image(&checker(), &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded, checker());
    }

    #[test]
    fn jpeg_is_written_without_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jpg");

        save_image(&checker(), &path).unwrap();

        let decoded = image::open(&path).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (4, 3));
        assert!(!decoded.color().has_alpha());
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.xyz");

        let err = save_image(&checker(), &path).unwrap_err();
        assert!(matches!(err, ExportError::UnsupportedFormat(p) if p == path));
        assert!(!path.exists());
    }

    #[test]
    fn missing_directory_is_an_encode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.png");

        assert!(matches!(save_image(&checker(), &path), Err(ExportError::Encode(_))));
    }
}
