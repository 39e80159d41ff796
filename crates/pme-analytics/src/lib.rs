//! # PME Analytics
//!
//! Public Market Equivalent benchmarking of private investments.
//!
//! This crate provides:
//!
//! - **Aggregation**: Per-date netting of typed transactions
//! - **XIRR**: Bracketed extended IRR and its running series
//! - **Benchmark**: Alignment of a public index to the investment's dates
//! - **PME**: Long-Nickels, modified PME and Kaplan-Schoar
//!
//! ## Design Philosophy
//!
//! - **Pure Functions**: Every input is explicit; there is no I/O or caching
//! - **Owned Series**: Algorithms take the benchmark series by value and hand
//!   it back with their columns filled
//! - **Undefined Is Not An Error**: A rate that cannot be certified is `None`
//!
//! ## Example
//!
//! ```rust
//! use pme_analytics::prelude::*;
//!
//! let d0 = Date::from_ymd(2020, 1, 1).unwrap();
//! let d1 = Date::from_ymd(2021, 1, 1).unwrap();
//!
//! let index = [BenchmarkValue::new(d0, 100.0), BenchmarkValue::new(d1, 121.0)];
//! let returns = [InvestmentReturn::new(d0, 1000.0), InvestmentReturn::new(d1, 500.0)];
//! let transactions = [
//!     CashFlow::new(d0, 1000.0, TransactionTypeId::new(1)),
//!     CashFlow::new(d1, -600.0, TransactionTypeId::new(2)),
//! ];
//!
//! let calculator = PmeCalculator::new(PmeConfig::new().with_tvpi(true));
//! let series = calculator.benchmark_returns(&index, &returns, &transactions).unwrap();
//! let series = calculator.long_nickels(series, &transactions).unwrap();
//!
//! // 1000 grown 21% less 600 distributed
//! let rvpi = series[1].rvpi.unwrap();
//! assert!((rvpi - 0.61).abs() < 1e-9);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]

pub mod aggregation;
pub mod benchmark;
pub mod config;
pub mod pme;
pub mod xirr;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::aggregation::{aggregate_by_date, unique_dates};
    pub use crate::benchmark::build_benchmark_returns;
    pub use crate::config::{PmeConfig, XirrSolverSettings};
    pub use crate::pme::{
        calculate_kaplan_schoar, calculate_long_nickels, calculate_modified_pme,
        long_nickels_theoretical_series, modified_pme_series, ModifiedPmeSeries, PaidInMultiples,
        PmeCalculator,
    };
    pub use crate::xirr::{calculate_xirr, xirr_series};

    pub use pme_math::solvers::SolverConfig;

    pub use pme_core::prelude::*;
}

pub use config::PmeConfig;
pub use pme::PmeCalculator;
