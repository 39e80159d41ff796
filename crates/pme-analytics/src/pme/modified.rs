//! Modified PME (mPME).
//!
//! Like Long-Nickels, contributions buy the index. A distribution, however,
//! does not sell a fixed amount: it sells the same *fraction* of the
//! theoretical holding as the real distribution represents of the real
//! investment,
//!
//! ```text
//! weight_t = |distribution_t| / (|distribution_t| + latest_balance_t)
//! ```
//!
//! where `latest_balance_t` is the most recent reported investment balance
//! on or before `t`. The weighted distribution takes the sign opposite to
//! the holding, so it matches the distribution sign under either convention. This keeps the theoretical holding from going negative
//! when the investment outperforms the index.

use log::{debug, trace};
use pme_core::search::find_le_by_key;
use pme_core::{BenchmarkReturn, CashFlow, DatedValue, InvestmentReturn, PmeResult};

use super::{FlowLedger, PaidInMultiples};
use crate::config::PmeConfig;
use crate::xirr::xirr_series;

/// Theoretical holdings and the distributions that produced them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModifiedPmeSeries {
    /// Theoretical balance after each date's flows.
    pub theoretical: Vec<InvestmentReturn>,
    /// Weighted distribution of each date, signed like the distributions.
    pub weighted_distributions: Vec<DatedValue>,
    /// Running multiples of each date.
    pub multiples: Vec<PaidInMultiples>,
}

#[derive(Debug, Clone, Copy, Default)]
struct ModifiedPmeState {
    theoretical: f64,
    index_level: Option<f64>,
    paid_in: f64,
    distributed: f64,
}

impl ModifiedPmeState {
    /// Advances to the next date, returning the weighted distribution.
    fn step(
        &mut self,
        index_level: f64,
        contribution: Option<f64>,
        distribution: Option<f64>,
        latest_balance: Option<f64>,
    ) -> f64 {
        let weight = match (distribution, latest_balance) {
            (Some(distribution), Some(balance)) => {
                let magnitude = distribution.abs();
                let denominator = magnitude + balance;
                if denominator == 0.0 {
                    0.0
                } else {
                    magnitude / denominator
                }
            }
            _ => 0.0,
        };

        let previous_level = self.index_level.unwrap_or(index_level);
        let growth = if previous_level == 0.0 {
            1.0
        } else {
            index_level / previous_level
        };

        let contribution = contribution.unwrap_or(0.0);
        let adjusted = self.theoretical * growth + contribution;
        let weighted_distribution = -weight * adjusted;

        self.theoretical = (1.0 - weight) * adjusted;
        self.index_level = Some(index_level);
        self.paid_in += contribution;
        self.distributed += weighted_distribution;

        weighted_distribution
    }

    fn multiples(&self) -> PaidInMultiples {
        PaidInMultiples::compute(self.paid_in, self.distributed, self.theoretical)
    }
}

/// Replays the investment through the index with weighted distributions.
///
/// `investment_returns` need not be sorted.
///
/// # Errors
///
/// `PmeError::InvalidState` if the transactions are not typed.
pub fn modified_pme_series(
    benchmark_returns: &[BenchmarkReturn],
    investment_returns: &[InvestmentReturn],
    investment_transactions: &[CashFlow],
    config: &PmeConfig,
) -> PmeResult<ModifiedPmeSeries> {
    let ledger = FlowLedger::new(investment_transactions, config)?;
    Ok(replay(benchmark_returns, investment_returns, &ledger))
}

fn replay(
    benchmark_returns: &[BenchmarkReturn],
    investment_returns: &[InvestmentReturn],
    ledger: &FlowLedger,
) -> ModifiedPmeSeries {
    let mut returns = investment_returns.to_vec();
    returns.sort_by_key(|r| r.date);

    let mut state = ModifiedPmeState::default();
    let mut out = ModifiedPmeSeries::default();
    for point in benchmark_returns {
        let latest_balance = find_le_by_key(&returns, &point.date, |r| r.date).map(|r| r.balance);
        let weighted = state.step(
            point.balance,
            ledger.contribution_on(point.date),
            ledger.distribution_on(point.date),
            latest_balance,
        );
        trace!(
            "mpme {}: theoretical {:.4}, weighted distribution {:.4}",
            point.date,
            state.theoretical,
            weighted
        );

        out.theoretical
            .push(InvestmentReturn::new(point.date, state.theoretical));
        out.weighted_distributions
            .push(DatedValue::new(point.date, weighted));
        out.multiples.push(state.multiples());
    }
    out
}

/// Runs modified PME, filling `xirr` and the paid-in multiples as
/// configured.
///
/// The XIRR of each date uses the contributions and weighted distributions
/// up to that date, with the theoretical holding as terminal value.
///
/// # Errors
///
/// `PmeError::InvalidState` if the transactions are not typed.
pub fn calculate_modified_pme(
    mut benchmark_returns: Vec<BenchmarkReturn>,
    investment_returns: &[InvestmentReturn],
    investment_transactions: &[CashFlow],
    config: &PmeConfig,
) -> PmeResult<Vec<BenchmarkReturn>> {
    debug!(
        "modified pme over {} dates, {} returns, {} transactions",
        benchmark_returns.len(),
        investment_returns.len(),
        investment_transactions.len()
    );
    let ledger = FlowLedger::new(investment_transactions, config)?;
    let series = replay(&benchmark_returns, investment_returns, &ledger);

    if config.calculate_tvpi {
        for (target, m) in benchmark_returns.iter_mut().zip(&series.multiples) {
            m.apply_to(target);
        }
    }

    if config.calculate_xirr {
        let flows: Vec<CashFlow> = ledger
            .contributions()
            .iter()
            .chain(&series.weighted_distributions)
            .map(|&flow| flow.into())
            .collect();
        let points = xirr_series(
            Some(series.theoretical.as_slice()),
            &flows,
            &config.solver_config(),
        )?;
        for (target, point) in benchmark_returns.iter_mut().zip(points) {
            target.xirr = point.xirr;
        }
    }

    Ok(benchmark_returns)
}
