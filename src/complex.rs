//! Complex numbers.
//!
//! A small `Copy` value type covering the arithmetic scripts need.
//! Division is exposed as [`Complex::checked_div`] rather than the `Div`
//! operator so that a zero divisor is reported instead of silently
//! producing NaN.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::error::{Result, UtilError};

/// Complex number `re + im·i`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    /// `0 + 0i`
    pub const ZERO: Complex = Complex { re: 0.0, im: 0.0 };
    /// `1 + 0i`
    pub const ONE: Complex = Complex { re: 1.0, im: 0.0 };
    /// The imaginary unit.
    pub const I: Complex = Complex { re: 0.0, im: 1.0 };

    /// Complex number from real and imaginary parts.
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Builds `r·(cos θ + i·sin θ)`.
    pub fn from_polar(magnitude: f64, phase: f64) -> Self {
        Self::new(magnitude * phase.cos(), magnitude * phase.sin())
    }

    /// |z|, computed with `hypot` to avoid intermediate overflow.
    pub fn magnitude(self) -> f64 {
        self.re.hypot(self.im)
    }

    /// Argument of `z` in `(−π, π]`.
    pub fn phase(self) -> f64 {
        self.im.atan2(self.re)
    }

    /// `a − bi`
    pub fn conjugate(self) -> Self {
        Self::new(self.re, -self.im)
    }

    /// `true` when both parts are exactly zero.
    pub fn is_zero(self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }

    /// `self / other`.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `other` is zero.
    ///
    /// # Examples
    /// ```
    /// use u_toolkit::complex::Complex;
    /// let q = Complex::new(1.0, 1.0).checked_div(Complex::I).unwrap();
    /// assert_eq!(q, Complex::new(1.0, -1.0));
    /// assert!(Complex::ONE.checked_div(Complex::ZERO).is_err());
    /// ```
    pub fn checked_div(self, other: Complex) -> Result<Complex> {
        let denom = other.re * other.re + other.im * other.im;
        if denom == 0.0 {
            return Err(UtilError::invalid("divisor", "complex division by zero"));
        }
        Ok(Complex::new(
            (self.re * other.re + self.im * other.im) / denom,
            (self.im * other.re - self.re * other.im) / denom,
        ))
    }

    /// `1 / self`.
    pub fn reciprocal(self) -> Result<Complex> {
        Complex::ONE.checked_div(self)
    }

    /// Integer power via the polar form (De Moivre).
    ///
    /// `z⁰ == 1` for every `z`.
    ///
    /// # Errors
    /// Returns `InvalidArgument` for a negative power of zero.
    pub fn powi(self, n: i32) -> Result<Complex> {
        if n == 0 {
            return Ok(Complex::ONE);
        }
        if self.is_zero() {
            if n < 0 {
                return Err(UtilError::invalid(
                    "n",
                    format!("zero raised to negative power {n}"),
                ));
            }
            return Ok(Complex::ZERO);
        }
        Ok(Complex::from_polar(
            self.magnitude().powi(n),
            self.phase() * f64::from(n),
        ))
    }

    /// Principal square root (non-negative real part).
    pub fn sqrt(self) -> Complex {
        if self.is_zero() {
            return Complex::ZERO;
        }
        Complex::from_polar(self.magnitude().sqrt(), self.phase() / 2.0)
    }

    /// e^z.
    pub fn exp(self) -> Complex {
        Complex::from_polar(self.re.exp(), self.im)
    }

    /// Component-wise comparison with an absolute tolerance.
    pub fn approx_eq(self, other: Complex, epsilon: f64) -> bool {
        (self.re - other.re).abs() <= epsilon && (self.im - other.im).abs() <= epsilon
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Complex::new(re, 0.0)
    }
}

impl Add for Complex {
    type Output = Complex;
    fn add(self, rhs: Complex) -> Complex {
        Complex::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for Complex {
    type Output = Complex;
    fn sub(self, rhs: Complex) -> Complex {
        Complex::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for Complex {
    type Output = Complex;
    fn mul(self, rhs: Complex) -> Complex {
        Complex::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl Mul<f64> for Complex {
    type Output = Complex;
    fn mul(self, rhs: f64) -> Complex {
        Complex::new(self.re * rhs, self.im * rhs)
    }
}

impl Neg for Complex {
    type Output = Complex;
    fn neg(self) -> Complex {
        Complex::new(-self.re, -self.im)
    }
}

impl fmt::Display for Complex {
    /// Formats as `a+bi` / `a-bi`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im < 0.0 {
            write!(f, "{}-{}i", self.re, -self.im)
        } else {
            write!(f, "{}+{}i", self.re, self.im)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_arithmetic() {
        let a = Complex::new(1.0, 2.0);
        let b = Complex::new(3.0, -1.0);
        assert_eq!(a + b, Complex::new(4.0, 1.0));
        assert_eq!(a - b, Complex::new(-2.0, 3.0));
        assert_eq!(a * b, Complex::new(5.0, 5.0));
        assert_eq!(-a, Complex::new(-1.0, -2.0));
        assert_eq!(a * 2.0, Complex::new(2.0, 4.0));
    }

    #[test]
    fn test_i_squared() {
        assert_eq!(Complex::I * Complex::I, Complex::new(-1.0, 0.0));
    }

    #[test]
    fn test_division() {
        let a = Complex::new(5.0, 5.0);
        let b = Complex::new(3.0, -1.0);
        let q = a.checked_div(b).unwrap();
        assert!(q.approx_eq(Complex::new(1.0, 2.0), 1e-12));
    }

    #[test]
    fn test_division_by_zero() {
        let err = Complex::new(1.0, 1.0).checked_div(Complex::ZERO).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(Complex::ZERO.reciprocal().is_err());
    }

    #[test]
    fn test_magnitude_phase() {
        let z = Complex::new(3.0, 4.0);
        assert_eq!(z.magnitude(), 5.0);
        assert!((Complex::I.phase() - FRAC_PI_2).abs() < 1e-15);
        assert!((Complex::new(-1.0, 0.0).phase() - PI).abs() < 1e-15);
        assert_eq!(z.conjugate(), Complex::new(3.0, -4.0));
    }

    #[test]
    fn test_polar_roundtrip() {
        let z = Complex::new(-2.0, 1.5);
        let back = Complex::from_polar(z.magnitude(), z.phase());
        assert!(back.approx_eq(z, 1e-12));
    }

    #[test]
    fn test_powi() {
        let z = Complex::new(1.0, 1.0);
        assert!(z.powi(2).unwrap().approx_eq(Complex::new(0.0, 2.0), 1e-12));
        assert!(z.powi(-1).unwrap().approx_eq(Complex::new(0.5, -0.5), 1e-12));
        assert_eq!(Complex::ZERO.powi(0).unwrap(), Complex::ONE);
        assert_eq!(Complex::ZERO.powi(3).unwrap(), Complex::ZERO);
        assert!(Complex::ZERO.powi(-2).is_err());
    }

    #[test]
    fn test_sqrt_and_exp() {
        let r = Complex::new(-4.0, 0.0).sqrt();
        assert!(r.approx_eq(Complex::new(0.0, 2.0), 1e-12));
        // Euler: e^(iπ) = −1
        let e = Complex::new(0.0, PI).exp();
        assert!(e.approx_eq(Complex::new(-1.0, 0.0), 1e-12));
    }

    #[test]
    fn test_display() {
        assert_eq!(Complex::new(1.0, 2.0).to_string(), "1+2i");
        assert_eq!(Complex::new(1.5, -0.5).to_string(), "1.5-0.5i");
    }
}
