//! Domain types for PME benchmarking.
//!
//! - [`Date`]: Calendar date with day precision
//! - [`TransactionTypeId`]: Opaque transaction classification
//! - [`CashFlow`]: Dated, typed transaction of an investment
//! - [`DatedValue`]: Net value on a date (aggregation output, XIRR input)
//! - [`BenchmarkValue`]: Benchmark index level
//! - [`InvestmentReturn`]: Investment valuation
//! - [`BenchmarkReturn`]: Aligned benchmark record carrying PME metrics
//! - [`XirrPoint`]: Element of an XIRR time series

mod cashflow;
mod date;
mod series;

pub use cashflow::{CashFlow, DatedValue, TransactionTypeId};
pub use date::Date;
pub use series::{BenchmarkReturn, BenchmarkValue, InvestmentReturn, XirrPoint};
