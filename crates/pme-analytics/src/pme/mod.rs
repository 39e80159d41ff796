//! Public Market Equivalent algorithms.
//!
//! Each algorithm replays an investment's cash flows through the benchmark
//! return series built by [`crate::benchmark::build_benchmark_returns`] and
//! writes its metrics back onto that series:
//!
//! | Algorithm | Fills |
//! |-----------|-------|
//! | [Long-Nickels](long_nickels) | `xirr`, `dpi`, `rvpi`, `tvpi` |
//! | [Modified PME](modified) | `xirr`, `dpi`, `rvpi`, `tvpi` |
//! | [Kaplan-Schoar](kaplan_schoar) | `kaplan_schoar_multiple`, `dpi`, `rvpi`, `tvpi` |
//!
//! `xirr` is only computed when [`PmeConfig::calculate_xirr`] is set and the
//! multiples only when [`PmeConfig::calculate_tvpi`] is set. Running several
//! algorithms over one series is allowed; a later run overwrites the shared
//! columns.
//!
//! Contributions and distributions are told apart by transaction type id,
//! never by sign. The usual convention is contributions positive (capital
//! paid in) and distributions negative.

pub mod kaplan_schoar;
pub mod long_nickels;
pub mod modified;
mod multiples;

pub use kaplan_schoar::calculate_kaplan_schoar;
pub use long_nickels::{calculate_long_nickels, long_nickels_theoretical_series};
pub use modified::{calculate_modified_pme, modified_pme_series, ModifiedPmeSeries};
pub use multiples::PaidInMultiples;

use pme_core::search::find_eq_by_key;
use pme_core::{
    BenchmarkReturn, BenchmarkValue, CashFlow, Date, DatedValue, InvestmentReturn, PmeResult,
};

use crate::aggregation::aggregate_by_date;
use crate::benchmark::build_benchmark_returns;
use crate::config::PmeConfig;

/// Entry point bundling a [`PmeConfig`] with the PME algorithms.
///
/// # Example
///
/// ```rust
/// use pme_analytics::prelude::*;
///
/// let jan = Date::from_ymd(2020, 1, 1).unwrap();
/// let dec = Date::from_ymd(2021, 1, 1).unwrap();
/// let index = [BenchmarkValue::new(jan, 100.0), BenchmarkValue::new(dec, 110.0)];
/// let returns = [InvestmentReturn::new(jan, 1000.0), InvestmentReturn::new(dec, 0.0)];
/// let transactions = [
///     CashFlow::new(jan, 1000.0, TransactionTypeId::new(1)),
///     CashFlow::new(dec, -1200.0, TransactionTypeId::new(2)),
/// ];
///
/// let calculator = PmeCalculator::new(PmeConfig::default());
/// let series = calculator.benchmark_returns(&index, &returns, &transactions).unwrap();
/// let series = calculator.kaplan_schoar(series, &transactions).unwrap();
///
/// let ks = series[1].kaplan_schoar_multiple.unwrap();
/// assert!((ks - 1200.0 / 1100.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PmeCalculator {
    config: PmeConfig,
}

impl PmeCalculator {
    /// Creates a calculator with the given configuration.
    #[must_use]
    pub fn new(config: PmeConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &PmeConfig {
        &self.config
    }

    /// Aligns the benchmark index to the investment's dates.
    ///
    /// See [`build_benchmark_returns`].
    pub fn benchmark_returns(
        &self,
        benchmark_values: &[BenchmarkValue],
        investment_returns: &[InvestmentReturn],
        investment_transactions: &[CashFlow],
    ) -> PmeResult<Vec<BenchmarkReturn>> {
        build_benchmark_returns(benchmark_values, investment_returns, investment_transactions)
    }

    /// Runs Long-Nickels PME over the series.
    pub fn long_nickels(
        &self,
        benchmark_returns: Vec<BenchmarkReturn>,
        investment_transactions: &[CashFlow],
    ) -> PmeResult<Vec<BenchmarkReturn>> {
        calculate_long_nickels(benchmark_returns, investment_transactions, &self.config)
    }

    /// Runs modified PME over the series.
    pub fn modified_pme(
        &self,
        benchmark_returns: Vec<BenchmarkReturn>,
        investment_returns: &[InvestmentReturn],
        investment_transactions: &[CashFlow],
    ) -> PmeResult<Vec<BenchmarkReturn>> {
        calculate_modified_pme(
            benchmark_returns,
            investment_returns,
            investment_transactions,
            &self.config,
        )
    }

    /// Runs Kaplan-Schoar PME over the series.
    pub fn kaplan_schoar(
        &self,
        benchmark_returns: Vec<BenchmarkReturn>,
        investment_transactions: &[CashFlow],
    ) -> PmeResult<Vec<BenchmarkReturn>> {
        calculate_kaplan_schoar(benchmark_returns, investment_transactions, &self.config)
    }
}

/// Contributions and distributions of an investment, netted per date.
#[derive(Debug, Clone)]
pub(crate) struct FlowLedger {
    contributions: Vec<DatedValue>,
    distributions: Vec<DatedValue>,
}

impl FlowLedger {
    pub(crate) fn new(transactions: &[CashFlow], config: &PmeConfig) -> PmeResult<Self> {
        Ok(Self {
            contributions: aggregate_by_date(transactions, Some(config.contribution_type))?,
            distributions: aggregate_by_date(transactions, Some(config.distribution_type))?,
        })
    }

    pub(crate) fn contribution_on(&self, date: Date) -> Option<f64> {
        find_eq_by_key(&self.contributions, &date, |c| c.date).map(|c| c.value)
    }

    pub(crate) fn distribution_on(&self, date: Date) -> Option<f64> {
        find_eq_by_key(&self.distributions, &date, |c| c.date).map(|c| c.value)
    }

    pub(crate) fn contributions(&self) -> &[DatedValue] {
        &self.contributions
    }

    pub(crate) fn distributions(&self) -> &[DatedValue] {
        &self.distributions
    }
}
