//! Actual/365 Fixed day count convention.

use super::DayCount;
use crate::types::Date;

/// Days in the fixed year basis.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Actual/365 Fixed day count convention.
///
/// The day count is the actual number of whole days between dates.
/// The year basis is always 365 days, leap years included.
///
/// # Formula
///
/// $$\text{Year Fraction} = \frac{\text{Actual Days}}{365}$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act365Fixed;

impl DayCount for Act365Fixed {
    fn name(&self) -> &'static str {
        "ACT/365F"
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        start.days_between(&end) as f64 / DAYS_PER_YEAR
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_full_year_non_leap() {
        let dc = Act365Fixed;
        let start = Date::from_ymd(2021, 1, 1).unwrap();
        let end = Date::from_ymd(2022, 1, 1).unwrap();

        assert_eq!(dc.day_count(start, end), 365);
        assert_relative_eq!(dc.year_fraction(start, end), 1.0);
    }

    #[test]
    fn test_full_year_leap() {
        let dc = Act365Fixed;
        let start = Date::from_ymd(2020, 1, 1).unwrap();
        let end = Date::from_ymd(2021, 1, 1).unwrap();

        // Leap years are not special-cased
        assert_eq!(dc.day_count(start, end), 366);
        assert_relative_eq!(dc.year_fraction(start, end), 366.0 / 365.0);
    }

    #[test]
    fn test_same_day_and_reversed() {
        let dc = Act365Fixed;
        let a = Date::from_ymd(2020, 7, 1).unwrap();
        let b = Date::from_ymd(2020, 1, 1).unwrap();

        assert_eq!(dc.year_fraction(a, a), 0.0);
        assert!(dc.year_fraction(a, b) < 0.0);
        assert_eq!(dc.name(), "ACT/365F");
    }
}
