//! Valuation and benchmark series records.

use serde::{Deserialize, Serialize};

use super::Date;

/// A benchmark index level on a date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkValue {
    /// Observation date
    pub date: Date,
    /// Index level (positive)
    pub value: f64,
}

impl BenchmarkValue {
    /// Creates a new benchmark value.
    #[must_use]
    pub fn new(date: Date, value: f64) -> Self {
        Self { date, value }
    }
}

/// A valuation of an investment on a date.
///
/// Used both for the private investment's reported balances and for the
/// theoretical investment series produced by the PME algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvestmentReturn {
    /// Valuation date
    pub date: Date,
    /// Balance on that date
    pub balance: f64,
}

impl InvestmentReturn {
    /// Creates a new investment return.
    #[must_use]
    pub fn new(date: Date, balance: f64) -> Self {
        Self { date, balance }
    }
}

/// One point of an XIRR time series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct XirrPoint {
    /// Measurement date
    pub date: Date,
    /// Annualized rate, `None` when it cannot be determined
    pub xirr: Option<f64>,
}

/// Benchmark performance aligned to one date of an investment's history.
///
/// Built once from benchmark values, then moved through each PME algorithm,
/// which fills in its own metric fields and leaves the others untouched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkReturn {
    /// Aligned date
    pub date: Date,
    /// Benchmark index level used for this date
    pub balance: f64,
    /// Return since the previous aligned date
    pub time_weighted_return: f64,
    /// Compounded return since the first aligned date, seeded at 1.0
    pub cumulative_time_weighted_return: f64,
    /// Kaplan-Schoar PME multiple
    pub kaplan_schoar_multiple: Option<f64>,
    /// PME expressed as an IRR (Long-Nickels or mPME)
    pub xirr: Option<f64>,
    /// Distributed to paid-in
    pub dpi: Option<f64>,
    /// Residual value to paid-in
    pub rvpi: Option<f64>,
    /// Total value to paid-in
    pub tvpi: Option<f64>,
}

impl BenchmarkReturn {
    /// Creates a benchmark return with all metric fields unset.
    #[must_use]
    pub fn new(
        date: Date,
        balance: f64,
        time_weighted_return: f64,
        cumulative_time_weighted_return: f64,
    ) -> Self {
        Self {
            date,
            balance,
            time_weighted_return,
            cumulative_time_weighted_return,
            kaplan_schoar_multiple: None,
            xirr: None,
            dpi: None,
            rvpi: None,
            tvpi: None,
        }
    }
}
