//! Property-based tests for PME invariants.
//!
//! These tests verify key properties that should always hold:
//! - Sorted search brackets the search key correctly
//! - Aggregation preserves totals and is idempotent
//! - The benchmark timeline holds each investment date exactly once
//! - Kaplan-Schoar is zero while nothing has been contributed
//! - XIRR never panics and honors its sign rules

use std::collections::BTreeSet;

use pme_analytics::prelude::*;
use pme_analytics::xirr::{MAX_RATE, MIN_RATE};
use proptest::prelude::*;

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

const CONTRIBUTION: TransactionTypeId = TransactionTypeId::new(1);
const DISTRIBUTION: TransactionTypeId = TransactionTypeId::new(2);

fn base_date() -> Date {
    Date::from_ymd(2015, 1, 1).unwrap()
}

fn date_strategy() -> impl Strategy<Value = Date> {
    (0i64..3650).prop_map(|offset| base_date().add_days(offset))
}

fn cashflow_strategy() -> impl Strategy<Value = CashFlow> {
    (date_strategy(), -1.0e6..1.0e6f64, any::<bool>()).prop_map(|(date, value, is_contribution)| {
        let transaction_type = if is_contribution {
            CONTRIBUTION
        } else {
            DISTRIBUTION
        };
        CashFlow::new(date, value, transaction_type)
    })
}

fn index_strategy() -> impl Strategy<Value = Vec<BenchmarkValue>> {
    prop::collection::vec((date_strategy(), 1.0..1000.0f64), 1..40).prop_map(|points| {
        points
            .into_iter()
            .map(|(date, value)| BenchmarkValue::new(date, value))
            .collect()
    })
}

// =============================================================================
// SEARCH
// =============================================================================

proptest! {
    #[test]
    fn prop_search_brackets_key(mut seq in prop::collection::vec(-100i32..100, 0..60), x in -120i32..120) {
        seq.sort_unstable();

        if let Some(lt) = find_lt(&seq, &x) {
            prop_assert!(*lt < x);
        }
        if let Some(gt) = find_gt(&seq, &x) {
            prop_assert!(*gt > x);
        }
        if let Some(le) = find_le(&seq, &x) {
            prop_assert!(*le <= x);
        }
        if let Some(ge) = find_ge(&seq, &x) {
            prop_assert!(*ge >= x);
        }

        prop_assert_eq!(find_eq(&seq, &x).is_some(), seq.contains(&x));
        if let Some(eq) = find_eq(&seq, &x) {
            prop_assert_eq!(*eq, x);
        }
        if let Some(i) = index(&seq, &x) {
            prop_assert_eq!(seq[i], x);
            prop_assert!(i == 0 || seq[i - 1] < x);
        }
    }

    #[test]
    fn prop_lt_is_rightmost_smaller(mut seq in prop::collection::vec(-100i32..100, 0..60), x in -120i32..120) {
        seq.sort_unstable();

        let expected = seq.iter().filter(|v| **v < x).max();
        prop_assert_eq!(find_lt(&seq, &x), expected);
    }
}

// =============================================================================
// AGGREGATION
// =============================================================================

proptest! {
    #[test]
    fn prop_aggregation_preserves_total(flows in prop::collection::vec(cashflow_strategy(), 0..60)) {
        let netted = aggregate_by_date(&flows, None).unwrap();

        let input_total: f64 = flows.iter().map(CashFlow::amount).sum();
        let output_total: f64 = netted.iter().map(|v| v.value).sum();
        let scale: f64 = flows.iter().map(|f| f.amount().abs()).sum::<f64>() + 1.0;
        prop_assert!((input_total - output_total).abs() <= 1e-9 * scale);

        let dates: Vec<Date> = netted.iter().map(|v| v.date).collect();
        prop_assert!(dates.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn prop_aggregation_idempotent(flows in prop::collection::vec(cashflow_strategy(), 0..60)) {
        let once = aggregate_by_date(&flows, Some(CONTRIBUTION)).unwrap();
        let retyped: Vec<CashFlow> = once
            .iter()
            .map(|v| CashFlow::new(v.date, v.value, CONTRIBUTION))
            .collect();

        let twice = aggregate_by_date(&retyped, Some(CONTRIBUTION)).unwrap();

        prop_assert_eq!(once, twice);
    }
}

// =============================================================================
// BENCHMARK AND PME
// =============================================================================

proptest! {
    #[test]
    fn prop_timeline_dates_unique(
        values in index_strategy(),
        return_dates in prop::collection::vec(date_strategy(), 0..30),
        flows in prop::collection::vec(cashflow_strategy(), 0..30),
    ) {
        let returns: Vec<InvestmentReturn> = return_dates
            .iter()
            .map(|date| InvestmentReturn::new(*date, 100.0))
            .collect();

        let series = build_benchmark_returns(&values, &returns, &flows).unwrap();

        let expected: BTreeSet<Date> = return_dates
            .iter()
            .copied()
            .chain(flows.iter().map(|f| f.date))
            .collect();
        let dates: Vec<Date> = series.iter().map(|r| r.date).collect();
        prop_assert_eq!(dates, expected.into_iter().collect::<Vec<_>>());
        prop_assert!(series.iter().all(|r| r.cumulative_time_weighted_return.is_finite()));
    }

    #[test]
    fn prop_kaplan_schoar_zero_without_contributions(
        values in index_strategy(),
        distributions in prop::collection::vec((date_strategy(), -1.0e5..0.0f64), 1..20),
    ) {
        let flows: Vec<CashFlow> = distributions
            .iter()
            .map(|(date, value)| CashFlow::new(*date, *value, DISTRIBUTION))
            .collect();
        let config = PmeConfig::default();
        let series = build_benchmark_returns(&values, &[], &flows).unwrap();

        let series = calculate_kaplan_schoar(series, &flows, &config).unwrap();

        prop_assert!(series.iter().all(|r| r.kaplan_schoar_multiple == Some(0.0)));
    }
}

// =============================================================================
// XIRR
// =============================================================================

proptest! {
    #[test]
    fn prop_xirr_sign_rules(flows in prop::collection::vec((date_strategy(), -1.0e6..1.0e6f64), 0..30)) {
        let flows: Vec<DatedValue> = flows
            .into_iter()
            .map(|(date, value)| DatedValue::new(date, value))
            .collect();

        let rate = calculate_xirr(&flows, &SolverConfig::default());

        if flows.iter().all(|f| f.value >= 0.0) {
            prop_assert_eq!(rate, None);
        } else if flows.iter().all(|f| f.value <= 0.0) {
            prop_assert_eq!(rate, Some(-1.0));
        } else if let Some(rate) = rate {
            prop_assert!((MIN_RATE..=MAX_RATE).contains(&rate));
        }
    }
}
