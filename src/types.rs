use image::Rgba;
use crate::vector::Vector3;

pub type Point3 = Vector3;

/// RGBA with 8 bits per channel.
pub type Pixel = Rgba<u8>;

pub const OPAQUE: u8 = 255;

pub const BLACK: Pixel = Rgba([0, 0, 0, OPAQUE]);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Point3,
    pub direction: Vector3,
}

impl Ray {
    pub fn new(origin: Point3, direction: Vector3) -> Self {
        Self {
            origin,
            direction,
        }
    }

    pub fn at(&self, t: f64) -> Point3 {
        self.origin + self.direction * t
    }
}
