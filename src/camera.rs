#[cfg(feature = "parallel")]
use rayon::prelude::*;
use crate::error::SceneError;
use crate::types::Point3;
use crate::vector::{Vector3, WORLD_UP};

/// Distance from the eye to the viewport plane.
const VIEWPORT_DISTANCE: f64 = 1.0;

/// Pinhole camera looking from `position` at `target`, with world-up fixed to +y.
///
/// The viewport is `viewport_width` x `viewport_height` scene units, one unit in
/// front of the eye, and is sampled by `image_width` x `image_height` pixels.
/// The viewport ratio should match the pixel ratio, otherwise the image is stretched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub position: Point3,
    pub target: Point3,
    pub image_width: u32,
    pub image_height: u32,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

/// Orthonormal frame of the camera. `vertical` points down the image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Basis {
    pub forward: Vector3,
    pub horizontal: Vector3,
    pub vertical: Vector3,
}

impl Camera {
    /// The camera must not sit on the vertical line through its target.
    ///
    /// Only x (front/back) and z (horizontal) are compared: a camera directly
    /// above or below the target has no horizontal axis either.
    pub fn is_valid(&self) -> bool {
        self.position.x() != self.target.x() || self.position.z() != self.target.z()
    }

    pub fn check(&self) -> Result<(), SceneError> {
        if self.image_width <= 1 || self.image_height <= 1 {
            return Err(SceneError::ImageTooSmall {
                width: self.image_width,
                height: self.image_height,
            });
        }
        let viewport_ok = |v: f64| v.is_finite() && v > 0.0;
        if !viewport_ok(self.viewport_width) || !viewport_ok(self.viewport_height) {
            return Err(SceneError::InvalidViewport {
                width: self.viewport_width,
                height: self.viewport_height,
            });
        }
        if !self.is_valid() {
            return Err(SceneError::CameraAtTarget);
        }
        Ok(())
    }

    pub fn basis(&self) -> Result<Basis, SceneError> {
        let direction = self.target - self.position;
        let forward = direction.normalize()?;
        let horizontal = direction.cross(WORLD_UP).normalize()?;
        let vertical = forward.cross(horizontal).normalize()?;
        Ok(Basis {
            forward,
            horizontal,
            vertical,
        })
    }

    /// Unit direction through every pixel, row-major from the top-left corner.
    pub fn view_rays(&self) -> Result<ViewRays, SceneError> {
        self.check()?;
        let basis = self.basis()?;

        let half_width = self.viewport_width / 2.0;
        let half_height = self.viewport_height / 2.0;
        let top_left = basis.forward * VIEWPORT_DISTANCE
            - basis.horizontal * half_width
            - basis.vertical * half_height;

        let step_x = basis.horizontal * ((2.0 * half_width) / (self.image_width as f64 - 1.0));
        let step_y = basis.vertical * ((2.0 * half_height) / (self.image_height as f64 - 1.0));

        let width = self.image_width as usize;
        let count = width * self.image_height as usize;
        let ray = |index: usize| {
            let row = (index / width) as f64;
            let column = (index % width) as f64;
            (top_left + step_x * column + step_y * row).normalize()
        };

        #[cfg(feature = "parallel")]
        let directions = (0..count).into_par_iter().map(ray).collect::<Result<Vec<_>, _>>()?;
        #[cfg(not(feature = "parallel"))]
        let directions = (0..count).map(ray).collect::<Result<Vec<_>, _>>()?;

        log::debug!(
            "Generated {} view rays from {} towards {}",
            directions.len(),
            self.position,
            self.target
        );

        Ok(ViewRays {
            width: self.image_width,
            height: self.image_height,
            directions,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewRays {
    width: u32,
    height: u32,
    directions: Vec<Vector3>,
}

impl ViewRays {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.directions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directions.is_empty()
    }

    pub fn get(&self, row: u32, column: u32) -> Option<Vector3> {
        if row >= self.height || column >= self.width {
            return None;
        }
        self.directions.get((row * self.width + column) as usize).copied()
    }

    pub fn as_slice(&self) -> &[Vector3] {
        &self.directions
    }
}
