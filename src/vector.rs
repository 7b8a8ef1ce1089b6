//! 2D vectors.
//!
//! Angles are in radians, measured counter-clockwise from +X.

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::error::{Result, UtilError};

/// 2D vector of `f64` components.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    /// `(0, 0)`
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };
    /// `(1, 1)`
    pub const ONE: Vec2 = Vec2 { x: 1.0, y: 1.0 };
    /// Unit +X.
    pub const RIGHT: Vec2 = Vec2 { x: 1.0, y: 0.0 };
    /// Unit +Y.
    pub const UP: Vec2 = Vec2 { x: 0.0, y: 1.0 };

    /// Vector from components.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing at `angle`.
    pub fn from_angle(angle: f64) -> Self {
        Self::new(angle.cos(), angle.sin())
    }

    /// Euclidean length.
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Squared length, avoiding the square root.
    pub fn length_squared(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Unit vector in the same direction; the zero vector stays zero.
    pub fn normalized(self) -> Vec2 {
        let len = self.length();
        if len == 0.0 {
            Vec2::ZERO
        } else {
            self / len
        }
    }

    /// Dot product.
    pub fn dot(self, other: Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product; positive when `other` is
    /// counter-clockwise from `self`.
    pub fn cross(self, other: Vec2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(self, other: Vec2) -> f64 {
        (other - self).length()
    }

    /// Angle of this vector relative to +X, in `(−π, π]`.
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Signed angle from `self` to `other`.
    pub fn angle_to(self, other: Vec2) -> f64 {
        self.cross(other).atan2(self.dot(other))
    }

    /// Rotates counter-clockwise by `angle` radians.
    pub fn rotated(self, angle: f64) -> Vec2 {
        let (sin, cos) = angle.sin_cos();
        Vec2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Linear interpolation toward `to`; `t` is not clamped.
    pub fn lerp(self, to: Vec2, t: f64) -> Vec2 {
        self + (to - self) * t
    }

    /// Projection of `self` onto `onto`.
    ///
    /// # Errors
    /// Returns `InvalidArgument` when `onto` is the zero vector.
    pub fn project_onto(self, onto: Vec2) -> Result<Vec2> {
        let len_sq = onto.length_squared();
        if len_sq == 0.0 {
            return Err(UtilError::invalid("onto", "cannot project onto the zero vector"));
        }
        Ok(onto * (self.dot(onto) / len_sq))
    }

    /// Reflects off a surface with the given unit `normal`.
    pub fn reflect(self, normal: Vec2) -> Vec2 {
        self - normal * (2.0 * self.dot(normal))
    }

    /// Shortens the vector to at most `max` length.
    pub fn limit_length(self, max: f64) -> Vec2 {
        let len = self.length();
        if len > max && len > 0.0 {
            self * (max / len)
        } else {
            self
        }
    }

    /// Component-wise comparison within `epsilon`.
    pub fn approx_eq(self, other: Vec2, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Vec2 {
    type Output = Vec2;
    fn div(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn rotation_preserves_length(
            x in -100.0_f64..100.0, y in -100.0_f64..100.0, a in -10.0_f64..10.0,
        ) {
            let v = Vec2::new(x, y);
            prop_assert!((v.rotated(a).length() - v.length()).abs() < 1e-9);
        }

        #[test]
        fn normalized_is_unit(x in -100.0_f64..100.0, y in -100.0_f64..100.0) {
            let v = Vec2::new(x, y);
            prop_assume!(v.length() > 1e-6);
            prop_assert!((v.normalized().length() - 1.0).abs() < 1e-12);
        }
    }
}
