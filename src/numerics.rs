//! Numerical methods: root finding, integration, differentiation.
//!
//! # Algorithms
//!
//! - **Root finding**: Newton–Raphson with an iteration cap and an
//!   early exit when the derivative flattens out.
//! - **Integration**: composite Simpson's rule.
//!   Reference: Burden & Faires, *Numerical Analysis*, §4.4.
//! - **Differentiation**: central difference, O(h²) truncation error.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Result, UtilError};

/// Step used by callers that do not care about the finite-difference step.
pub const DEFAULT_DERIVATIVE_STEP: f64 = 1e-5;

/// Tuning knobs for [`find_root_newton_with`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewtonOptions {
    pub max_iterations: usize,
    /// Convergence threshold on successive iterates, also used as the
    /// "flat derivative" and "is a root" threshold.
    pub tolerance: f64,
}

impl Default for NewtonOptions {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            tolerance: 1e-7,
        }
    }
}

/// How a Newton search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RootStatus {
    /// Successive iterates differ by less than the tolerance.
    Converged,
    /// The iteration cap was reached first.
    MaxIterations,
    /// |f'(x)| dropped below the tolerance. `at_root` tells whether the
    /// returned iterate satisfies |f(x)| < tolerance anyway.
    FlatDerivative { at_root: bool },
}

/// Result of a Newton search: the last iterate and how it was reached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RootOutcome {
    pub value: f64,
    pub iterations: usize,
    pub status: RootStatus,
}

impl RootOutcome {
    /// `true` when the search converged or stopped on an exact root.
    pub fn is_root(&self) -> bool {
        matches!(
            self.status,
            RootStatus::Converged | RootStatus::FlatDerivative { at_root: true }
        )
    }
}

/// Newton–Raphson root search with default [`NewtonOptions`].
///
/// # Examples
/// ```
/// use u_toolkit::numerics::find_root_newton;
/// let root = find_root_newton(|x| x * x - 4.0, |x| 2.0 * x, 1.0);
/// assert!((root.value - 2.0).abs() < 1e-7);
/// assert!(root.is_root());
/// ```
pub fn find_root_newton<F, D>(f: F, df: D, x0: f64) -> RootOutcome
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    find_root_newton_with(f, df, x0, &NewtonOptions::default())
}

/// Newton–Raphson root search.
///
/// Iterates `x ← x − f(x)/f'(x)` until two successive iterates differ by
/// less than `options.tolerance` or `options.max_iterations` is reached.
/// If `|f'(x)|` falls below the tolerance the search stops and returns
/// the current iterate with [`RootStatus::FlatDerivative`].
///
/// # Complexity
/// One evaluation of `f` and `df` per iteration.
pub fn find_root_newton_with<F, D>(f: F, df: D, x0: f64, options: &NewtonOptions) -> RootOutcome
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    let tol = options.tolerance;
    let mut x = x0;
    for iteration in 0..options.max_iterations {
        let fx = f(x);
        let dfx = df(x);
        if dfx.abs() < tol {
            let at_root = fx.abs() < tol;
            if !at_root {
                warn!(x, derivative = dfx, "newton: derivative vanished away from a root");
            }
            return RootOutcome {
                value: x,
                iterations: iteration,
                status: RootStatus::FlatDerivative { at_root },
            };
        }
        let next = x - fx / dfx;
        if (next - x).abs() < tol {
            return RootOutcome {
                value: next,
                iterations: iteration + 1,
                status: RootStatus::Converged,
            };
        }
        x = next;
    }
    RootOutcome {
        value: x,
        iterations: options.max_iterations,
        status: RootStatus::MaxIterations,
    }
}

/// Definite integral of `f` over `[a, b]` by composite Simpson's rule.
///
/// An odd `intervals` count is bumped to the next even number. With
/// `h = (b − a)/n` the weights are `1, 4, 2, 4, …, 4, 1` scaled by `h/3`.
/// Reversed bounds give the negated integral.
///
/// # Errors
/// Returns `InvalidArgument` if `intervals == 0`.
///
/// # Examples
/// ```
/// use u_toolkit::numerics::integrate_simpson;
/// let area = integrate_simpson(|x| x * x, 0.0, 2.0, 100).unwrap();
/// assert!((area - 8.0 / 3.0).abs() < 1e-3);
/// ```
pub fn integrate_simpson<F>(f: F, a: f64, b: f64, intervals: usize) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    if intervals == 0 {
        return Err(UtilError::invalid("intervals", "must be at least 1"));
    }
    let n = if intervals % 2 == 1 {
        intervals + 1
    } else {
        intervals
    };
    let h = (b - a) / n as f64;
    let mut sum = f(a) + f(b);
    for i in 1..n {
        let weight = if i % 2 == 1 { 4.0 } else { 2.0 };
        sum += weight * f(a + i as f64 * h);
    }
    Ok(sum * h / 3.0)
}

/// Central-difference estimate of f'(x): `(f(x+h) − f(x−h)) / 2h`.
///
/// # Errors
/// Returns `InvalidArgument` if `h` is zero or not finite.
pub fn derivative<F>(f: F, x: f64, h: f64) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    if h == 0.0 || !h.is_finite() {
        return Err(UtilError::invalid(
            "h",
            format!("step must be finite and non-zero, got {h}"),
        ));
    }
    Ok((f(x + h) - f(x - h)) / (2.0 * h))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn newton_finds_square_roots(c in 0.5_f64..1000.0) {
            let out = find_root_newton(|x| x * x - c, |x| 2.0 * x, c.max(1.0));
            prop_assert!(out.is_root(), "status {:?} for c={c}", out.status);
            prop_assert!((out.value - c.sqrt()).abs() < 1e-6);
        }

        #[test]
        fn simpson_linear_is_exact(m in -10.0_f64..10.0, q in -10.0_f64..10.0) {
            let area = integrate_simpson(|x| m * x + q, 0.0, 4.0, 8).unwrap();
            let expected = 8.0 * m + 4.0 * q;
            prop_assert!((area - expected).abs() < 1e-9);
        }
    }
}
