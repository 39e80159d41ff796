//! # PME Core
//!
//! Core types, search primitives, and abstractions for the PME benchmarking library.
//!
//! This crate provides the foundational building blocks used throughout the workspace:
//!
//! - **Types**: Domain records like `Date`, `CashFlow`, `BenchmarkValue`, `BenchmarkReturn`
//! - **Day Count Conventions**: The ACT/365 Fixed basis used by XIRR
//! - **Search**: Leftmost/rightmost binary search over date-sorted series
//! - **Errors**: The `PmeError` taxonomy shared by all crates
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: Newtypes keep calendar dates and opaque transaction ids apart
//! - **Date Semantics**: Dates compare by calendar, never lexically
//! - **Explicit Absence**: "Not found" and "undefined" are `Option::None`, not errors
//!
//! ## Example
//!
//! ```rust
//! use pme_core::prelude::*;
//!
//! let values = vec![
//!     BenchmarkValue::new(Date::from_ymd(2020, 1, 1).unwrap(), 100.0),
//!     BenchmarkValue::new(Date::from_ymd(2020, 7, 1).unwrap(), 110.0),
//! ];
//!
//! let on_or_before = find_le_by_key(&values, &Date::from_ymd(2020, 3, 31).unwrap(), |v| v.date);
//! assert_eq!(on_or_before.map(|v| v.value), Some(100.0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod daycounts;
pub mod error;
pub mod search;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycounts::{Act365Fixed, DayCount};
    pub use crate::error::{PmeError, PmeResult};
    pub use crate::search::{
        bisect_left_by_key, bisect_right_by_key, find_eq, find_eq_by_key, find_ge,
        find_ge_by_key, find_gt, find_gt_by_key, find_le, find_le_by_key, find_lt,
        find_lt_by_key, index, index_by_key, sublist_by_factors, sublist_by_key,
    };
    pub use crate::types::{
        BenchmarkReturn, BenchmarkValue, CashFlow, Date, DatedValue, InvestmentReturn,
        TransactionTypeId, XirrPoint,
    };
}

// Re-export commonly used types at crate root
pub use error::{PmeError, PmeResult};
pub use types::{
    BenchmarkReturn, BenchmarkValue, CashFlow, Date, DatedValue, InvestmentReturn,
    TransactionTypeId, XirrPoint,
};
