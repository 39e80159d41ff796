//! Integration tests for pme-analytics.
//!
//! These tests run the full pipeline: benchmark alignment followed by one or
//! more PME algorithms over the same series.

use approx::assert_relative_eq;
use pme_analytics::prelude::*;

// =============================================================================
// TEST FIXTURES
// =============================================================================

const CONTRIBUTION: TransactionTypeId = TransactionTypeId::new(1);
const DISTRIBUTION: TransactionTypeId = TransactionTypeId::new(2);

fn d(y: i32, m: u32, day: u32) -> Date {
    Date::from_ymd(y, m, day).unwrap()
}

/// Index gaining 10% each half year.
fn benchmark_values() -> Vec<BenchmarkValue> {
    vec![
        BenchmarkValue::new(d(2020, 1, 1), 100.0),
        BenchmarkValue::new(d(2020, 7, 1), 110.0),
        BenchmarkValue::new(d(2021, 1, 1), 121.0),
    ]
}

fn investment_returns() -> Vec<InvestmentReturn> {
    vec![
        InvestmentReturn::new(d(2020, 1, 1), 1000.0),
        InvestmentReturn::new(d(2020, 7, 1), 1050.0),
        InvestmentReturn::new(d(2021, 1, 1), 500.0),
    ]
}

/// 1000 paid in, 600 distributed a year later.
fn transactions() -> Vec<CashFlow> {
    vec![
        CashFlow::new(d(2020, 1, 1), 1000.0, CONTRIBUTION),
        CashFlow::new(d(2021, 1, 1), -600.0, DISTRIBUTION),
    ]
}

fn full_config() -> PmeConfig {
    PmeConfig::new().with_xirr(true).with_tvpi(true)
}

fn aligned(calculator: &PmeCalculator) -> Vec<BenchmarkReturn> {
    calculator
        .benchmark_returns(&benchmark_values(), &investment_returns(), &transactions())
        .unwrap()
}

// =============================================================================
// PIPELINE
// =============================================================================

#[test]
fn test_benchmark_alignment() {
    let calculator = PmeCalculator::new(PmeConfig::default());

    let series = aligned(&calculator);

    assert_eq!(series.len(), 3);
    assert_eq!(series[0].time_weighted_return, 0.0);
    assert_relative_eq!(series[1].time_weighted_return, 0.1, epsilon = 1e-12);
    assert_relative_eq!(series[2].time_weighted_return, 0.1, epsilon = 1e-12);
    assert_relative_eq!(series[2].cumulative_time_weighted_return, 1.21, epsilon = 1e-12);
}

#[test]
fn test_long_nickels_end_to_end() {
    let calculator = PmeCalculator::new(full_config());

    let series = calculator
        .long_nickels(aligned(&calculator), &transactions())
        .unwrap();
    let theoretical =
        long_nickels_theoretical_series(&series, &transactions(), calculator.config()).unwrap();

    let balances: Vec<f64> = theoretical.iter().map(|r| r.balance).collect();
    assert_relative_eq!(balances[0], 1000.0, epsilon = 1e-9);
    assert_relative_eq!(balances[1], 1100.0, epsilon = 1e-9);
    assert_relative_eq!(balances[2], 610.0, epsilon = 1e-9);

    assert_relative_eq!(series[2].dpi.unwrap(), 0.6, epsilon = 1e-9);
    assert_relative_eq!(series[2].rvpi.unwrap(), 0.61, epsilon = 1e-9);
    assert_relative_eq!(series[2].tvpi.unwrap(), 1.21, epsilon = 1e-9);

    assert_eq!(series[0].xirr, None);
    assert_relative_eq!(
        series[2].xirr.unwrap(),
        1.21_f64.powf(365.0 / 366.0) - 1.0,
        epsilon = 1e-8
    );
    assert!(series.iter().all(|r| r.kaplan_schoar_multiple.is_none()));
}

#[test]
fn test_modified_pme_end_to_end() {
    let calculator = PmeCalculator::new(full_config());

    let series = calculator
        .modified_pme(aligned(&calculator), &investment_returns(), &transactions())
        .unwrap();

    assert_relative_eq!(series[2].dpi.unwrap(), 0.66, epsilon = 1e-9);
    assert_relative_eq!(series[2].rvpi.unwrap(), 0.55, epsilon = 1e-9);
    assert_relative_eq!(series[2].tvpi.unwrap(), 1.21, epsilon = 1e-9);
    // weighting changes the split, not the benchmark's total return
    assert_relative_eq!(
        series[2].xirr.unwrap(),
        1.21_f64.powf(365.0 / 366.0) - 1.0,
        epsilon = 1e-8
    );
}

#[test]
fn test_kaplan_schoar_end_to_end() {
    let calculator = PmeCalculator::new(PmeConfig::default());

    let series = calculator
        .kaplan_schoar(aligned(&calculator), &transactions())
        .unwrap();

    assert_relative_eq!(
        series[2].kaplan_schoar_multiple.unwrap(),
        600.0 / 1210.0,
        epsilon = 1e-12
    );
    assert!(series.iter().all(|r| r.xirr.is_none() && r.tvpi.is_none()));
}

#[test]
fn test_algorithms_compose_on_one_series() {
    let calculator = PmeCalculator::new(full_config());

    let series = aligned(&calculator);
    let series = calculator.kaplan_schoar(series, &transactions()).unwrap();
    let series = calculator.long_nickels(series, &transactions()).unwrap();

    assert_relative_eq!(
        series[2].kaplan_schoar_multiple.unwrap(),
        600.0 / 1210.0,
        epsilon = 1e-12
    );
    assert!(series[2].xirr.is_some());
    // Long-Nickels ran last, so its multiples are the ones kept
    assert_relative_eq!(series[2].rvpi.unwrap(), 0.61, epsilon = 1e-9);
}

#[test]
fn test_opposite_sign_convention() {
    // contributions negative, distributions positive
    let flipped = vec![
        CashFlow::new(d(2020, 1, 1), -1000.0, CONTRIBUTION),
        CashFlow::new(d(2021, 1, 1), 600.0, DISTRIBUTION),
    ];
    let config = PmeConfig::default();
    let calculator = PmeCalculator::new(config.clone());
    let series = calculator
        .benchmark_returns(&benchmark_values(), &investment_returns(), &flipped)
        .unwrap();

    let theoretical = long_nickels_theoretical_series(&series, &flipped, &config).unwrap();
    let magnitudes: Vec<f64> = theoretical.iter().map(|r| r.balance.abs()).collect();
    assert_relative_eq!(magnitudes[0], 1000.0, epsilon = 1e-9);
    assert_relative_eq!(magnitudes[1], 1100.0, epsilon = 1e-9);
    assert_relative_eq!(magnitudes[2], 610.0, epsilon = 1e-9);

    let modified = modified_pme_series(&series, &investment_returns(), &flipped, &config).unwrap();
    assert_relative_eq!(modified.theoretical[2].balance.abs(), 550.0, epsilon = 1e-9);
    assert_relative_eq!(modified.weighted_distributions[2].value, 660.0, epsilon = 1e-9);

    let series = calculator.kaplan_schoar(series, &flipped).unwrap();
    assert_relative_eq!(
        series[2].kaplan_schoar_multiple.unwrap(),
        0.496,
        epsilon = 1e-3
    );
}

#[test]
fn test_untyped_transactions_fail() {
    let calculator = PmeCalculator::new(PmeConfig::default());
    let untyped = vec![CashFlow::untyped(d(2020, 1, 1), 1000.0)];
    let series = calculator
        .benchmark_returns(&benchmark_values(), &investment_returns(), &untyped)
        .unwrap();

    let result = calculator.kaplan_schoar(series, &untyped);

    assert!(matches!(result, Err(PmeError::InvalidState { .. })));
}

#[test]
fn test_empty_benchmark_fails() {
    let calculator = PmeCalculator::new(PmeConfig::default());

    let result = calculator.benchmark_returns(&[], &investment_returns(), &transactions());

    assert!(matches!(result, Err(PmeError::InvalidState { .. })));
}

// =============================================================================
// HOST JSON
// =============================================================================

#[test]
fn test_json_inputs_and_output() {
    let values: Vec<BenchmarkValue> = serde_json::from_str(
        r#"[
            {"date": "2020-01-01", "value": 100.0},
            {"date": "2020-07-01", "value": 110.0},
            {"date": "2021-01-01", "value": 121.0}
        ]"#,
    )
    .unwrap();
    let transactions: Vec<CashFlow> = serde_json::from_str(
        r#"[
            {"date": "2020-01-01", "value": 1000.0, "transactionTypeId": 1},
            {"date": "2021-01-01", "value": -600.0, "transactionTypeId": 2}
        ]"#,
    )
    .unwrap();
    let config = PmeConfig::from_json(r#"{"calculate_tvpi": true}"#).unwrap();
    let calculator = PmeCalculator::new(config);

    let series = calculator
        .benchmark_returns(&values, &investment_returns(), &transactions)
        .unwrap();
    let series = calculator.kaplan_schoar(series, &transactions).unwrap();
    let json = serde_json::to_value(&series[2]).unwrap();

    assert_eq!(json["date"], "2021-01-01");
    assert!(json["kaplanSchoarMultiple"].as_f64().is_some());
    assert!(json["tvpi"].as_f64().is_some());
    assert!(json["xirr"].is_null());
}

// =============================================================================
// STANDALONE XIRR
// =============================================================================

#[test]
fn test_xirr_series_over_transactions() {
    let config = SolverConfig::default();

    let points = xirr_series(None, &transactions(), &config).unwrap();

    assert_eq!(points.len(), 2);
    // contribution alone is a total loss from the investor's side
    assert_eq!(points[0].xirr, Some(-1.0));
    // 1000 out, 600 back a year later
    assert!(points[1].xirr.unwrap() < 0.0);
}
