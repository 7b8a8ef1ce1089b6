//! Integer and scalar helpers.
//!
//! Small building blocks used by scripts and by the other modules:
//! primality, exact integer powers, factorials, interpolation and
//! rounding. Functions with impossible preconditions (negative exponent,
//! overflow) return [`UtilError::InvalidArgument`].

use crate::error::{Result, UtilError};

/// Primality test by 6k ± 1 trial division.
///
/// # Returns
/// - `false` for `n <= 1`.
/// - `true` for 2 and 3.
///
/// # Complexity
/// Time: O(√n), Space: O(1)
///
/// # Examples
/// ```
/// use u_toolkit::math::is_prime;
/// assert!(is_prime(2));
/// assert!(is_prime(97));
/// assert!(!is_prime(1));
/// assert!(!is_prime(91)); // 7 × 13
/// ```
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut i = 5_i64;
    // i <= n / i avoids overflowing i * i near i64::MAX
    while i <= n / i {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Raises `base` to a non-negative integer power by repeated squaring.
///
/// `powi(v, 0) == 1` for every `v` (including 0), and `powi(0, e) == 0`
/// for `e > 0`.
///
/// # Errors
/// Returns `InvalidArgument` if `exp` is negative.
///
/// # Complexity
/// O(log exp) multiplications.
///
/// # Examples
/// ```
/// use u_toolkit::math::powi;
/// assert_eq!(powi(2.0, 10).unwrap(), 1024.0);
/// assert_eq!(powi(0.0, 0).unwrap(), 1.0);
/// assert!(powi(2.0, -1).is_err());
/// ```
pub fn powi(base: f64, exp: i64) -> Result<f64> {
    if exp < 0 {
        return Err(UtilError::invalid(
            "exp",
            format!("must be non-negative, got {exp}"),
        ));
    }
    let mut result = 1.0;
    let mut b = base;
    let mut e = exp as u64;
    while e > 0 {
        if e & 1 == 1 {
            result *= b;
        }
        b *= b;
        e >>= 1;
    }
    Ok(result)
}

/// n! as a `u64`.
///
/// # Errors
/// Returns `InvalidArgument` when the result overflows (`n > 20`).
///
/// # Examples
/// ```
/// use u_toolkit::math::factorial;
/// assert_eq!(factorial(0).unwrap(), 1);
/// assert_eq!(factorial(5).unwrap(), 120);
/// assert!(factorial(21).is_err());
/// ```
pub fn factorial(n: u32) -> Result<u64> {
    (1..=u64::from(n))
        .try_fold(1_u64, |acc, k| acc.checked_mul(k))
        .ok_or_else(|| UtilError::invalid("n", format!("{n}! overflows u64")))
}

/// The n-th Fibonacci number with F(0) = 0, F(1) = 1.
///
/// # Errors
/// Returns `InvalidArgument` when the result overflows (`n > 93`).
pub fn fibonacci(n: u32) -> Result<u64> {
    if n == 0 {
        return Ok(0);
    }
    let (mut a, mut b) = (0_u64, 1_u64);
    for _ in 1..n {
        let next = a
            .checked_add(b)
            .ok_or_else(|| UtilError::invalid("n", format!("F({n}) overflows u64")))?;
        a = b;
        b = next;
    }
    Ok(b)
}

/// Greatest common divisor (Euclid) of the magnitudes; `gcd(0, 0) == 0`.
///
/// Unsigned so that `gcd(i64::MIN, 0) == 2⁶³` is representable.
pub fn gcd(a: i64, b: i64) -> u64 {
    let (mut x, mut y) = (a.unsigned_abs(), b.unsigned_abs());
    while y != 0 {
        let t = x % y;
        x = y;
        y = t;
    }
    x
}

/// Least common multiple. `lcm(0, x) == 0`.
///
/// # Errors
/// Returns `InvalidArgument` if the result overflows `i64`.
pub fn lcm(a: i64, b: i64) -> Result<i64> {
    if a == 0 || b == 0 {
        return Ok(0);
    }
    (a.unsigned_abs() / gcd(a, b))
        .checked_mul(b.unsigned_abs())
        .and_then(|m| i64::try_from(m).ok())
        .ok_or_else(|| UtilError::invalid("b", format!("lcm({a}, {b}) overflows i64")))
}

/// Clamps `value` into `[min, max]`. Bounds given in the wrong order are
/// swapped instead of panicking like `f64::clamp`.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    value.max(lo).min(hi)
}

/// Linear interpolation `a + (b − a)·t`. `t` is not clamped.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Inverse of [`lerp`]: the `t` at which `lerp(a, b, t) == value`.
///
/// Returns 0 for a degenerate range (`a == b`).
pub fn inverse_lerp(a: f64, b: f64, value: f64) -> f64 {
    let range = b - a;
    if range.abs() < f64::EPSILON {
        return 0.0;
    }
    (value - a) / range
}

/// Maps `value` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// # Examples
/// ```
/// use u_toolkit::math::remap;
/// assert_eq!(remap(5.0, 0.0, 10.0, 0.0, 100.0), 50.0);
/// ```
pub fn remap(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    lerp(out_min, out_max, inverse_lerp(in_min, in_max, value))
}

/// Rounds to a fixed number of decimal places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Sign as `-1.0`, `0.0` or `1.0`. NaN stays NaN.
pub fn sign(x: f64) -> f64 {
    if x.is_nan() {
        f64::NAN
    } else if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Absolute-tolerance float comparison.
pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() <= epsilon
}

/// `true` for 1, 2, 4, …; `false` for 0.
pub fn is_power_of_two(n: u64) -> bool {
    n.is_power_of_two()
}

/// Sum of the decimal digits of `|n|`.
pub fn digit_sum(n: i64) -> u64 {
    let mut rest = n.unsigned_abs();
    let mut sum = 0;
    while rest > 0 {
        sum += rest % 10;
        rest /= 10;
    }
    sum
}

/// Wraps `value` into the half-open range `[min, max)`.
///
/// Returns `min` for an empty or inverted range.
///
/// # Examples
/// ```
/// use u_toolkit::math::wrap;
/// assert_eq!(wrap(370.0, 0.0, 360.0), 10.0);
/// assert_eq!(wrap(-10.0, 0.0, 360.0), 350.0);
/// ```
pub fn wrap(value: f64, min: f64, max: f64) -> f64 {
    let range = max - min;
    if range <= 0.0 {
        return min;
    }
    min + (value - min).rem_euclid(range)
}
