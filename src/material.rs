use image::Rgba;
use crate::types::{Pixel, OPAQUE};
use crate::vector::Vector3;

/// Cosine of the angle between light and surface normal, clamped at zero for
/// surfaces facing away from the light.
#[inline(always)]
pub fn incident_light(light_direction: Vector3, normal: Vector3) -> f64 {
    light_direction.dot(normal).max(0.0)
}

/// Diffuse surface: a base color and the fraction of it kept without any direct light.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lambertian {
    color: Pixel,
    ambient: f64,
}

impl Lambertian {
    pub fn rgb(r: u8, g: u8, b: u8, ambient: f64) -> Self {
        Self {
            color: Rgba([r, g, b, OPAQUE]),
            ambient,
        }
    }

    pub fn color(&self) -> Pixel {
        self.color
    }

    pub fn ambient(&self) -> f64 {
        self.ambient
    }

    #[inline(always)]
    pub fn shading_factor(&self, incident_light: f64) -> f64 {
        self.ambient + (1.0 - self.ambient) * incident_light
    }

    /// Scales the color channels, truncating toward zero. Alpha is kept as is.
    pub fn shade(&self, incident_light: f64) -> Pixel {
        let factor = self.shading_factor(incident_light);
        let [r, g, b, a] = self.color.0;
        Rgba([
            (r as f64 * factor) as u8,
            (g as f64 * factor) as u8,
            (b as f64 * factor) as u8,
            a,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incident_light_is_clamped() {
        let up = Vector3::new(0.0, 1.0, 0.0);
        assert_eq!(incident_light(up, up), 1.0);
        assert_eq!(incident_light(-up, up), 0.0);
        assert_eq!(incident_light(Vector3::new(1.0, 0.0, 0.0), up), 0.0);
    }

    #[test]
    fn unlit_surface_keeps_ambient_fraction() {
        let m = Lambertian::rgb(200, 100, 51, 0.25);
        assert_eq!(m.shade(0.0), Rgba([50, 25, 12, 255]));
    }

    #[test]
    fn fully_lit_surface_keeps_full_color() {
        let m = Lambertian::rgb(200, 100, 51, 0.25);
        assert_eq!(m.shade(1.0), Rgba([200, 100, 51, 255]));
    }

    #[test]
    fn channels_truncate_toward_zero() {
        let m = Lambertian::rgb(255, 3, 1, 0.5);
        // factor = 0.5 + 0.5 * 0.5 = 0.75
        assert_eq!(m.shade(0.5), Rgba([191, 2, 0, 255]));
    }
}
