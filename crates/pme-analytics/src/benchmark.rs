//! Alignment of a public benchmark index to an investment's dates.

use log::debug;
use pme_core::search::{find_gt_by_key, find_le_by_key};
use pme_core::{
    BenchmarkReturn, BenchmarkValue, CashFlow, Date, InvestmentReturn, PmeError, PmeResult,
};

use crate::aggregation::unique_dates;

/// Builds the benchmark return series on the investment's timeline.
///
/// The timeline is every distinct date of `investment_returns` and
/// `investment_transactions`, ascending. Each date takes the latest index
/// value on or before it; a date that precedes the whole index borrows the
/// first value after it instead.
///
/// The time-weighted return of a date is the relative change from the
/// previous date's index value, or `0` on the first date and whenever the
/// previous value is zero. The cumulative return compounds from `1`.
///
/// # Errors
///
/// `PmeError::InvalidState` if `benchmark_values` is empty.
///
/// # Example
///
/// ```rust
/// use pme_analytics::benchmark::build_benchmark_returns;
/// use pme_core::{BenchmarkValue, Date, InvestmentReturn};
///
/// let jan = Date::from_ymd(2020, 1, 1).unwrap();
/// let jul = Date::from_ymd(2020, 7, 1).unwrap();
/// let index = [BenchmarkValue::new(jan, 100.0), BenchmarkValue::new(jul, 110.0)];
/// let returns = [InvestmentReturn::new(jan, 0.0), InvestmentReturn::new(jul, 0.0)];
///
/// let series = build_benchmark_returns(&index, &returns, &[]).unwrap();
/// assert_eq!(series[0].time_weighted_return, 0.0);
/// assert!((series[1].time_weighted_return - 0.1).abs() < 1e-12);
/// ```
pub fn build_benchmark_returns(
    benchmark_values: &[BenchmarkValue],
    investment_returns: &[InvestmentReturn],
    investment_transactions: &[CashFlow],
) -> PmeResult<Vec<BenchmarkReturn>> {
    if benchmark_values.is_empty() {
        return Err(PmeError::invalid_state(
            "benchmark values must not be empty",
        ));
    }

    let mut index = benchmark_values.to_vec();
    index.sort_by_key(|v| v.date);

    let timeline = unique_dates(
        investment_returns
            .iter()
            .map(|r| r.date)
            .chain(investment_transactions.iter().map(|t| t.date)),
    );
    debug!(
        "aligning {} benchmark values to {} investment dates",
        index.len(),
        timeline.len()
    );

    let mut compounding = CumulativeReturn::new();
    timeline
        .into_iter()
        .map(|date| {
            let value = index_value_on(&index, date)?;
            Ok(compounding.step(BenchmarkValue::new(date, value)))
        })
        .collect()
}

/// Index value in force on `date`, falling back to the first later value.
fn index_value_on(index: &[BenchmarkValue], date: Date) -> PmeResult<f64> {
    if let Some(found) = find_le_by_key(index, &date, |v| v.date) {
        return Ok(found.value);
    }

    let later = find_gt_by_key(index, &date, |v| v.date)
        .ok_or_else(|| PmeError::invalid_state(format!("no benchmark value around {date}")))?;
    debug!(
        "{date} precedes the benchmark index, using {} from {}",
        later.value,
        later.date
    );
    Ok(later.value)
}

/// Running state of the time-weighted return recurrence.
#[derive(Debug, Clone, Copy)]
struct CumulativeReturn {
    previous: Option<f64>,
    cumulative: f64,
}

impl CumulativeReturn {
    fn new() -> Self {
        Self {
            previous: None,
            cumulative: 1.0,
        }
    }

    fn step(&mut self, point: BenchmarkValue) -> BenchmarkReturn {
        let twr = match self.previous {
            Some(previous) if previous != 0.0 => (point.value - previous) / previous,
            _ => 0.0,
        };
        self.cumulative *= 1.0 + twr;
        self.previous = Some(point.value);

        BenchmarkReturn::new(point.date, point.value, twr, self.cumulative)
    }
}
