//! Bracketed root finding.
//!
//! [`brent`] is the only solver: given an interval on which `f` changes
//! sign, it always converges, and the iteration cap only guards against a
//! tolerance finer than the floating-point grid around the root.
//!
//! # Example: One-year IRR
//!
//! ```rust
//! use pme_math::solvers::{brent, SolverConfig};
//!
//! // -100 today, +120 in a year
//! let npv = |r: f64| -100.0 + 120.0 / (1.0 + r);
//!
//! let result = brent(npv, -0.999, 100.0, &SolverConfig::default()).unwrap();
//! assert!((result.root - 0.20).abs() < 1e-9);
//! ```

mod brent;

pub use brent::brent;

use crate::error::{MathError, MathResult};

/// Absolute root tolerance used unless configured otherwise.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Iteration cap used unless configured otherwise.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Stopping rules shared by the solvers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Stop once the bracket around the root is narrower than this.
    pub tolerance: f64,
    /// Give up after this many iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TOLERANCE, DEFAULT_MAX_ITERATIONS)
    }
}

impl SolverConfig {
    /// Stopping rules with the given tolerance and cap.
    #[must_use]
    pub const fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Replaces the tolerance.
    #[must_use]
    pub fn with_tolerance(self, tolerance: f64) -> Self {
        Self { tolerance, ..self }
    }

    /// Replaces the iteration cap.
    #[must_use]
    pub fn with_max_iterations(self, max_iterations: u32) -> Self {
        Self {
            max_iterations,
            ..self
        }
    }

    /// Rejects a non-positive or non-finite tolerance and a zero cap.
    pub fn validate(&self) -> MathResult<()> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(MathError::invalid_input(format!(
                "tolerance must be positive and finite, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(MathError::invalid_input("max_iterations must be at least 1"));
        }
        Ok(())
    }
}

/// A converged root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult {
    /// Root estimate.
    pub root: f64,
    /// Iterations it took.
    pub iterations: u32,
    /// `f(root)`, signed.
    pub residual: f64,
}
