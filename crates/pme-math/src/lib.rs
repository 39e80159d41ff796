//! # PME Math
//!
//! Numerical utilities for the PME benchmarking library.
//!
//! This crate provides:
//!
//! - **Solvers**: Bracketed root finding (Brent's method) with capped iterations
//!
//! ## Design Philosophy
//!
//! - **Fail Closed**: A solver that cannot converge returns an error, never loops
//! - **Explicit Brackets**: Callers decide the search interval

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]
#![allow(clippy::float_cmp)]

pub mod error;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::solvers::{brent, SolverConfig, SolverResult};
}

pub use error::{MathError, MathResult};
