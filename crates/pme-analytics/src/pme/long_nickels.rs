//! Long-Nickels PME (index comparison method).
//!
//! Every contribution buys the index and every distribution sells it. The
//! resulting theoretical balance is what the investor would hold had the
//! same cash flows been invested in the public market instead:
//!
//! ```text
//! balance_t = balance_{t-1} * (1 + twr_t) + contribution_t + distribution_t
//! ```
//!
//! The running XIRR treats that balance as the terminal value on each date.

use log::{debug, trace};
use pme_core::{BenchmarkReturn, CashFlow, InvestmentReturn, PmeResult};

use super::{FlowLedger, PaidInMultiples};
use crate::config::PmeConfig;
use crate::xirr::xirr_series;

#[derive(Debug, Clone, Copy, Default)]
struct LongNickelsState {
    balance: f64,
    paid_in: f64,
    distributed: f64,
}

impl LongNickelsState {
    fn step(&mut self, twr: f64, contribution: Option<f64>, distribution: Option<f64>) {
        self.balance *= 1.0 + twr;
        if let Some(contribution) = contribution {
            self.balance += contribution;
            self.paid_in += contribution;
        }
        if let Some(distribution) = distribution {
            self.balance += distribution;
            self.distributed += distribution;
        }
    }

    fn multiples(&self) -> PaidInMultiples {
        PaidInMultiples::compute(self.paid_in, self.distributed, self.balance)
    }
}

/// Replays the ledger, yielding the theoretical balance and multiples per date.
fn replay(
    benchmark_returns: &[BenchmarkReturn],
    ledger: &FlowLedger,
) -> Vec<(InvestmentReturn, PaidInMultiples)> {
    let mut state = LongNickelsState::default();
    benchmark_returns
        .iter()
        .map(|point| {
            state.step(
                point.time_weighted_return,
                ledger.contribution_on(point.date),
                ledger.distribution_on(point.date),
            );
            trace!("long-nickels {}: balance {:.4}", point.date, state.balance);
            (
                InvestmentReturn::new(point.date, state.balance),
                state.multiples(),
            )
        })
        .collect()
}

/// The Long-Nickels theoretical balance on every date of the series.
///
/// # Errors
///
/// `PmeError::InvalidState` if the transactions are not typed.
pub fn long_nickels_theoretical_series(
    benchmark_returns: &[BenchmarkReturn],
    investment_transactions: &[CashFlow],
    config: &PmeConfig,
) -> PmeResult<Vec<InvestmentReturn>> {
    let ledger = FlowLedger::new(investment_transactions, config)?;
    Ok(replay(benchmark_returns, &ledger)
        .into_iter()
        .map(|(balance, _)| balance)
        .collect())
}

/// Runs Long-Nickels PME, filling `xirr` and the paid-in multiples as
/// configured.
///
/// The XIRR of each date uses every contribution and distribution up to
/// that date, with the theoretical balance as terminal value. Transactions
/// of any other type (fees, for instance) are left out of the XIRR, as they
/// are left out of the theoretical balance.
///
/// # Errors
///
/// `PmeError::InvalidState` if the transactions are not typed.
pub fn calculate_long_nickels(
    mut benchmark_returns: Vec<BenchmarkReturn>,
    investment_transactions: &[CashFlow],
    config: &PmeConfig,
) -> PmeResult<Vec<BenchmarkReturn>> {
    debug!(
        "long-nickels over {} dates, {} transactions",
        benchmark_returns.len(),
        investment_transactions.len()
    );
    let ledger = FlowLedger::new(investment_transactions, config)?;
    let (theoretical, multiples): (Vec<_>, Vec<_>) =
        replay(&benchmark_returns, &ledger).into_iter().unzip();

    if config.calculate_tvpi {
        for (target, m) in benchmark_returns.iter_mut().zip(&multiples) {
            m.apply_to(target);
        }
    }

    if config.calculate_xirr {
        let flows: Vec<CashFlow> = ledger
            .contributions()
            .iter()
            .chain(ledger.distributions())
            .map(|&flow| flow.into())
            .collect();
        let points = xirr_series(
            Some(theoretical.as_slice()),
            &flows,
            &config.solver_config(),
        )?;
        for (target, point) in benchmark_returns.iter_mut().zip(points) {
            target.xirr = point.xirr;
        }
    }

    Ok(benchmark_returns)
}
