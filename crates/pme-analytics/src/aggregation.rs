//! Per-date netting of investment transactions.

use std::collections::{BTreeMap, BTreeSet};

use pme_core::{CashFlow, Date, DatedValue, PmeError, PmeResult, TransactionTypeId};

/// Sums transaction values per date, optionally keeping a single type.
///
/// Missing values count as zero. The result holds one entry per distinct
/// date, sorted ascending, regardless of the input order. Values on the same
/// date are summed in input order.
///
/// # Errors
///
/// `PmeError::InvalidState` if a type filter is given and the first
/// transaction carries no type: the input is then not classified and the
/// filter cannot be applied.
///
/// # Example
///
/// ```rust
/// use pme_analytics::aggregation::aggregate_by_date;
/// use pme_core::{CashFlow, Date, TransactionTypeId};
///
/// let day = Date::from_ymd(2020, 1, 1).unwrap();
/// let flows = [
///     CashFlow::new(day, 100.0, TransactionTypeId::new(1)),
///     CashFlow::new(day, 50.0, TransactionTypeId::new(1)),
///     CashFlow::new(day, -30.0, TransactionTypeId::new(2)),
/// ];
///
/// let contributions = aggregate_by_date(&flows, Some(TransactionTypeId::new(1))).unwrap();
/// assert_eq!(contributions.len(), 1);
/// assert_eq!(contributions[0].value, 150.0);
/// ```
pub fn aggregate_by_date(
    transactions: &[CashFlow],
    type_filter: Option<TransactionTypeId>,
) -> PmeResult<Vec<DatedValue>> {
    if type_filter.is_some()
        && transactions
            .first()
            .is_some_and(|first| first.transaction_type.is_none())
    {
        return Err(PmeError::invalid_state(
            "transactions must carry a transaction type to be filtered by type",
        ));
    }

    let mut totals: BTreeMap<Date, f64> = BTreeMap::new();
    for flow in transactions
        .iter()
        .filter(|flow| type_filter.map_or(true, |t| flow.is_type(t)))
    {
        *totals.entry(flow.date).or_insert(0.0) += flow.amount();
    }

    Ok(totals
        .into_iter()
        .map(|(date, value)| DatedValue::new(date, value))
        .collect())
}

/// Distinct dates of any number of date streams, sorted ascending.
pub fn unique_dates<I>(dates: I) -> Vec<Date>
where
    I: IntoIterator<Item = Date>,
{
    dates.into_iter().collect::<BTreeSet<_>>().into_iter().collect()
}
