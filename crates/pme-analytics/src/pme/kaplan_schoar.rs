//! Kaplan-Schoar PME.
//!
//! Both legs of the cash flow history are compounded forward with the index
//! to each date, and the PME is the ratio of future-valued distributions to
//! future-valued contributions:
//!
//! ```text
//! D_t = D_{t-1} * (1 + twr_t) + distribution_t
//! C_t = C_{t-1} * (1 + twr_t) + contribution_t
//! KS_t = D_t / -C_t        (0 while C_t is 0)
//! ```
//!
//! Distributions are negative under the usual sign convention, so a
//! multiple above 1 means the investment beat the index.

use log::{debug, trace};
use pme_core::{BenchmarkReturn, CashFlow, PmeResult};

use super::{FlowLedger, PaidInMultiples};
use crate::config::PmeConfig;

#[derive(Debug, Clone, Copy, Default)]
struct KaplanSchoarState {
    future_distributions: f64,
    future_contributions: f64,
    paid_in: f64,
}

impl KaplanSchoarState {
    fn step(&mut self, twr: f64, contribution: Option<f64>, distribution: Option<f64>) -> f64 {
        let contribution = contribution.unwrap_or(0.0);
        self.future_distributions =
            self.future_distributions * (1.0 + twr) + distribution.unwrap_or(0.0);
        self.future_contributions = self.future_contributions * (1.0 + twr) + contribution;
        self.paid_in += contribution;

        if self.future_contributions == 0.0 {
            0.0
        } else {
            self.future_distributions / -self.future_contributions
        }
    }

    fn multiples(&self) -> PaidInMultiples {
        PaidInMultiples::compute(
            self.paid_in,
            self.future_distributions,
            self.future_contributions + self.future_distributions,
        )
    }
}

/// Runs Kaplan-Schoar PME, filling `kaplan_schoar_multiple` on every date
/// and the paid-in multiples when configured.
///
/// # Errors
///
/// `PmeError::InvalidState` if the transactions are not typed.
pub fn calculate_kaplan_schoar(
    mut benchmark_returns: Vec<BenchmarkReturn>,
    investment_transactions: &[CashFlow],
    config: &PmeConfig,
) -> PmeResult<Vec<BenchmarkReturn>> {
    debug!(
        "kaplan-schoar over {} dates, {} transactions",
        benchmark_returns.len(),
        investment_transactions.len()
    );
    let ledger = FlowLedger::new(investment_transactions, config)?;

    let mut state = KaplanSchoarState::default();
    for point in &mut benchmark_returns {
        let multiple = state.step(
            point.time_weighted_return,
            ledger.contribution_on(point.date),
            ledger.distribution_on(point.date),
        );
        trace!("kaplan-schoar {}: {:.6}", point.date, multiple);

        point.kaplan_schoar_multiple = Some(multiple);
        if config.calculate_tvpi {
            state.multiples().apply_to(point);
        }
    }

    Ok(benchmark_returns)
}
