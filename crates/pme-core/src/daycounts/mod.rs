//! Day count conventions for rate annualization.
//!
//! XIRR discounts each flow by the number of whole days since the first
//! flow over a fixed 365-day year, matching spreadsheet XIRR. Only that
//! basis is provided.
//!
//! # Usage
//!
//! ```rust
//! use pme_core::daycounts::{Act365Fixed, DayCount};
//! use pme_core::types::Date;
//!
//! let dc = Act365Fixed;
//! let start = Date::from_ymd(2021, 1, 1).unwrap();
//! let end = Date::from_ymd(2022, 1, 1).unwrap();
//!
//! assert_eq!(dc.day_count(start, end), 365);
//! assert_eq!(dc.year_fraction(start, end), 1.0);
//! ```

mod act365;

pub use act365::{Act365Fixed, DAYS_PER_YEAR};

use crate::types::Date;

/// Trait for day count conventions.
///
/// Implementations must be thread-safe (`Send + Sync`).
pub trait DayCount: Send + Sync {
    /// Returns the name of the day count convention.
    fn name(&self) -> &'static str;

    /// Calculates the year fraction between two dates.
    ///
    /// Can be negative if `end < start`.
    fn year_fraction(&self, start: Date, end: Date) -> f64;

    /// Calculates the day count between two dates.
    fn day_count(&self, start: Date, end: Date) -> i64;
}
