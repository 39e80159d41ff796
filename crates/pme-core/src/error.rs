//! Error types for the PME library.
//!
//! Only caller-side precondition violations are errors. Searches that find
//! nothing and rates that cannot be certified are reported as `None`.

use thiserror::Error;

/// A specialized Result type for PME operations.
pub type PmeResult<T> = Result<T, PmeError>;

/// The main error type for PME operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PmeError {
    /// A precondition on the caller's input was violated.
    #[error("Invalid state: {reason}")]
    InvalidState {
        /// Description of the violated precondition.
        reason: String,
    },

    /// Error parsing or constructing a calendar date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Configuration could not be read.
    #[error("Configuration error: {reason}")]
    Config {
        /// Description of the configuration error.
        reason: String,
    },
}

impl PmeError {
    /// Creates an invalid state error.
    #[must_use]
    pub fn invalid_state(reason: impl Into<String>) -> Self {
        Self::InvalidState {
            reason: reason.into(),
        }
    }

    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PmeError::invalid_state("benchmark values list should never be empty");
        assert!(err.to_string().starts_with("Invalid state"));
        assert!(err.to_string().contains("never be empty"));
    }

    #[test]
    fn test_date_error() {
        let err = PmeError::invalid_date("Cannot parse: 2024-13-01");
        assert!(err.to_string().contains("2024-13-01"));
    }
}
