//! Errors raised by the numerical routines.

use thiserror::Error;

/// Result alias for `pme-math`.
pub type MathResult<T> = Result<T, MathError>;

/// Failure of a numerical routine.
///
/// Callers that treat an unsolvable equation as "undefined" match on these
/// and map them to `None`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// The iteration cap was hit before the bracket shrank below tolerance.
    #[error("no convergence within {iterations} iterations: best estimate {estimate}, |f| = {residual:.3e}")]
    ConvergenceFailed {
        /// Iterations performed.
        iterations: u32,
        /// Best root estimate when iteration stopped.
        estimate: f64,
        /// `|f(estimate)|`.
        residual: f64,
    },

    /// `f` has the same strict sign at both ends of the search interval.
    #[error("[{lower}, {upper}] does not bracket a root: f = {f_lower:.3e} and {f_upper:.3e}")]
    InvalidBracket {
        /// One end of the interval.
        lower: f64,
        /// Other end of the interval.
        upper: f64,
        /// `f(lower)`.
        f_lower: f64,
        /// `f(upper)`.
        f_upper: f64,
    },

    /// Bounds or settings the routine cannot work with.
    #[error("invalid solver input: {reason}")]
    InvalidInput {
        /// What was wrong.
        reason: String,
    },
}

impl MathError {
    /// Iteration cap reached at `estimate`.
    #[must_use]
    pub fn convergence_failed(iterations: u32, estimate: f64, residual: f64) -> Self {
        Self::ConvergenceFailed {
            iterations,
            estimate,
            residual: residual.abs(),
        }
    }

    /// Interval `[lower, upper]` with same-signed end values.
    #[must_use]
    pub fn invalid_bracket(lower: f64, upper: f64, f_lower: f64, f_upper: f64) -> Self {
        Self::InvalidBracket {
            lower,
            upper,
            f_lower,
            f_upper,
        }
    }

    /// Unusable bounds or settings.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = MathError::convergence_failed(100, 0.25, -1e-6);
        assert!(err.to_string().contains("100 iterations"));
        assert!(matches!(err, MathError::ConvergenceFailed { residual, .. } if residual > 0.0));

        let err = MathError::invalid_bracket(-0.999, 100.0, 1.0, 2.0);
        assert!(err.to_string().contains("does not bracket"));

        assert!(MathError::invalid_input("tolerance must be positive")
            .to_string()
            .contains("tolerance must be positive"));
    }
}
