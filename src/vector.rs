use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use bevy_math::DVec3;
use serde::{Deserialize, Serialize};
use crate::error::GeometryError;

/// A point or a direction in scene space (x = front/back, y = vertical, z = horizontal).
///
/// Equality is exact and componentwise, there is no epsilon.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Vector3(DVec3);

pub const WORLD_UP: Vector3 = Vector3::new(0.0, 1.0, 0.0);

impl Vector3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    #[inline(always)]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self(DVec3::new(x, y, z))
    }

    #[inline(always)]
    pub fn x(&self) -> f64 {
        self.0.x
    }

    #[inline(always)]
    pub fn y(&self) -> f64 {
        self.0.y
    }

    #[inline(always)]
    pub fn z(&self) -> f64 {
        self.0.z
    }

    #[inline(always)]
    pub fn dot(&self, rhs: Vector3) -> f64 {
        self.0.dot(rhs.0)
    }

    #[inline(always)]
    pub fn cross(&self, rhs: Vector3) -> Vector3 {
        Self(self.0.cross(rhs.0))
    }

    #[inline(always)]
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Euclidean length. Overflow or NaN input is reported instead of propagated.
    pub fn norm(&self) -> Result<f64, GeometryError> {
        let norm = self.0.length();
        if norm.is_finite() {
            Ok(norm)
        } else {
            Err(GeometryError::NonFinite)
        }
    }

    pub fn normalize(&self) -> Result<Vector3, GeometryError> {
        let norm = self.norm()?;
        if norm == 0.0 {
            return Err(GeometryError::ZeroLength);
        }
        Ok(Self(self.0 / norm))
    }

    /// Angle between two vectors in radians, within [0, pi].
    pub fn angle(&self, rhs: Vector3) -> Result<f64, GeometryError> {
        let denominator = self.norm()? * rhs.norm()?;
        if denominator == 0.0 {
            return Err(GeometryError::ZeroLength);
        }

        let cos = self.dot(rhs) / denominator;
        if !(-1.0..=1.0).contains(&cos) {
            return Err(GeometryError::OutOfDomain);
        }
        Ok(cos.acos())
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    #[inline(always)]
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;

    #[inline(always)]
    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from(v: [f64; 3]) -> Self {
        Self(DVec3::from_array(v))
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(v: Vector3) -> Self {
        v.0.to_array()
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0.x, self.0.y, self.0.z)
    }
}
