//! Brent's root-finding algorithm.

use log::trace;

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Brent's root-finding algorithm.
///
/// Keeps a bracket `[b, c]` around the root and, at each step, tries inverse
/// quadratic interpolation (or the secant step when only two distinct points
/// are known), falling back to bisection whenever the interpolated step
/// would leave the bracket or shrink it too slowly.
///
/// Requires: `f(lower)` and `f(upper)` of opposite sign, or one of them zero.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `lower` - One end of the bracket
/// * `upper` - The other end of the bracket
/// * `config` - Tolerance on the root and the iteration cap
///
/// # Errors
///
/// * `MathError::InvalidInput` if a bound is not finite or `config` is unusable
/// * `MathError::InvalidBracket` if the bracket does not straddle a root
/// * `MathError::ConvergenceFailed` if `max_iterations` is reached
///
/// # Example
///
/// ```rust
/// use pme_math::solvers::{brent, SolverConfig};
///
/// // Find root of x^3 - x - 2
/// let f = |x: f64| x * x * x - x - 2.0;
///
/// let result = brent(f, 1.0, 2.0, &SolverConfig::default()).unwrap();
/// assert!((f(result.root)).abs() < 1e-9);
/// ```
pub fn brent<F>(f: F, lower: f64, upper: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    config.validate()?;
    if !lower.is_finite() || !upper.is_finite() {
        return Err(MathError::invalid_input(format!(
            "bracket [{lower}, {upper}] must be finite"
        )));
    }

    let mut a = lower;
    let mut b = upper;
    let mut fa = f(a);
    let mut fb = f(b);

    if fa == 0.0 {
        return Ok(SolverResult {
            root: a,
            iterations: 0,
            residual: fa,
        });
    }
    if fb == 0.0 {
        return Ok(SolverResult {
            root: b,
            iterations: 0,
            residual: fb,
        });
    }
    if fa.signum() == fb.signum() {
        return Err(MathError::invalid_bracket(a, b, fa, fb));
    }

    // c is the contrapoint: f(b) and f(c) always have opposite signs
    let mut c = a;
    let mut fc = fa;
    let mut step = b - a;
    let mut prev_step = step;

    for iteration in 0..config.max_iterations {
        if fb.signum() == fc.signum() {
            c = a;
            fc = fa;
            step = b - a;
            prev_step = step;
        }

        // Keep b as the best estimate
        if fc.abs() < fb.abs() {
            a = b;
            b = c;
            c = a;
            fa = fb;
            fb = fc;
            fc = fa;
        }

        let tol = 2.0 * f64::EPSILON * b.abs() + 0.5 * config.tolerance;
        let half_width = 0.5 * (c - b);

        if half_width.abs() <= tol || fb == 0.0 {
            trace!("brent converged to {b} after {iteration} iterations");
            return Ok(SolverResult {
                root: b,
                iterations: iteration,
                residual: fb,
            });
        }

        if prev_step.abs() >= tol && fa.abs() > fb.abs() {
            let s = fb / fa;
            let (mut p, mut q) = if a == c {
                (2.0 * half_width * s, 1.0 - s)
            } else {
                let qa = fa / fc;
                let r = fb / fc;
                (
                    s * (2.0 * half_width * qa * (qa - r) - (b - a) * (r - 1.0)),
                    (qa - 1.0) * (r - 1.0) * (s - 1.0),
                )
            };

            if p > 0.0 {
                q = -q;
            } else {
                p = -p;
            }

            let max_interpolated =
                (3.0 * half_width * q - (tol * q).abs()).min((prev_step * q).abs());
            if 2.0 * p < max_interpolated {
                prev_step = step;
                step = p / q;
            } else {
                step = half_width;
                prev_step = half_width;
            }
        } else {
            step = half_width;
            prev_step = half_width;
        }

        a = b;
        fa = fb;
        b += if step.abs() > tol {
            step
        } else {
            tol.copysign(half_width)
        };
        fb = f(b);
    }

    Err(MathError::convergence_failed(config.max_iterations, b, fb))
}
