//! Extended internal rate of return over irregularly dated cash flows.
//!
//! The rate `r` solves
//!
//! ```text
//! sum_i value_i / (1 + r) ^ (days(d_0, d_i) / 365) = 0
//! ```
//!
//! where `d_0` is the earliest flow date. Roots are only searched on
//! `[-0.999, 100]`: a rate that cannot be bracketed there, or that the
//! solver cannot pin down within its iteration cap, is undefined (`None`).

use log::{debug, trace};
use pme_core::daycounts::{Act365Fixed, DayCount};
use pme_core::search::bisect_right_by_key;
use pme_core::{CashFlow, DatedValue, InvestmentReturn, PmeResult, XirrPoint};
use pme_math::solvers::{brent, SolverConfig};

use crate::aggregation::aggregate_by_date;

/// Lowest rate considered: a 99.9% loss per year.
pub const MIN_RATE: f64 = -0.999;

/// Highest rate considered: 10,000% per year.
pub const MAX_RATE: f64 = 100.0;

/// Computes the XIRR of a set of dated flows.
///
/// Flows are sorted by date first, so input order does not matter.
///
/// Returns:
/// * `None` when every value is non-negative (including no flows at all)
/// * `Some(-1.0)` when every value is non-positive and at least one is negative
/// * the bracketed root otherwise, or `None` if the net present value does
///   not change sign over `[MIN_RATE, MAX_RATE]` or the solver fails
///
/// # Example
///
/// ```rust
/// use pme_analytics::xirr::calculate_xirr;
/// use pme_core::{Date, DatedValue};
/// use pme_math::solvers::SolverConfig;
///
/// let flows = [
///     DatedValue::new(Date::from_ymd(2021, 1, 1).unwrap(), -100.0),
///     DatedValue::new(Date::from_ymd(2022, 1, 1).unwrap(), 200.0),
/// ];
///
/// let rate = calculate_xirr(&flows, &SolverConfig::default()).unwrap();
/// assert!((rate - 1.0).abs() < 1e-8);
/// ```
pub fn calculate_xirr(cashflows: &[DatedValue], config: &SolverConfig) -> Option<f64> {
    if cashflows.iter().all(|cf| cf.value >= 0.0) {
        return None;
    }
    if cashflows.iter().all(|cf| cf.value <= 0.0) {
        return Some(-1.0);
    }

    let mut flows = cashflows.to_vec();
    flows.sort_by_key(|cf| cf.date);
    let start = flows.first()?.date;

    let timed: Vec<(f64, f64)> = flows
        .iter()
        .map(|cf| (Act365Fixed.year_fraction(start, cf.date), cf.value))
        .collect();
    let npv = |rate: f64| -> f64 {
        timed
            .iter()
            .map(|(years, value)| value / (1.0 + rate).powf(*years))
            .sum()
    };

    let at_min = npv(MIN_RATE);
    let at_max = npv(MAX_RATE);
    let bracketed = (at_min > 0.0 && at_max < 0.0) || (at_min < 0.0 && at_max > 0.0);
    if !bracketed {
        trace!("no XIRR sign change on [{MIN_RATE}, {MAX_RATE}]: {at_min:.4e}, {at_max:.4e}");
        return None;
    }

    match brent(npv, MIN_RATE, MAX_RATE, config) {
        Ok(result) => Some(result.root),
        Err(e) => {
            debug!("XIRR undefined over {} flows: {}", flows.len(), e);
            None
        }
    }
}

/// Computes a running XIRR over a transaction history.
///
/// Transactions are netted per date and sign-flipped once, so that money
/// paid into the investment becomes an outflow of the investor.
///
/// * Without `returns`, one point per netted date: the XIRR of every flow
///   up to and including that date.
/// * With `returns`, one point per return: the XIRR of every flow dated on
///   or before the return date, plus the return balance as a terminal inflow
///   on that date. Points follow the order of `returns`.
///
/// # Errors
///
/// Propagates aggregation errors.
pub fn xirr_series(
    returns: Option<&[InvestmentReturn]>,
    transactions: &[CashFlow],
    config: &SolverConfig,
) -> PmeResult<Vec<XirrPoint>> {
    let flows: Vec<DatedValue> = aggregate_by_date(transactions, None)?
        .into_iter()
        .map(|flow| DatedValue::new(flow.date, -flow.value))
        .collect();

    let points = match returns {
        None => (0..flows.len())
            .map(|i| XirrPoint {
                date: flows[i].date,
                xirr: calculate_xirr(&flows[..=i], config),
            })
            .collect(),
        Some(returns) => returns
            .iter()
            .map(|ret| {
                let cutoff = bisect_right_by_key(&flows, &ret.date, |flow| flow.date);
                let mut window = Vec::with_capacity(cutoff + 1);
                window.extend_from_slice(&flows[..cutoff]);
                window.push(DatedValue::new(ret.date, ret.balance));
                XirrPoint {
                    date: ret.date,
                    xirr: calculate_xirr(&window, config),
                }
            })
            .collect(),
    };

    Ok(points)
}
