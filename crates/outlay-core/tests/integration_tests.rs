//! Integration tests for outlay-core
//!
//! These tests exercise the full load → validate → forecast → adjust workflow.

use std::fs;

use outlay_core::{
    adjust, calculate, forecast, load_dataset, validate, EconomicIndicators, Error,
    ExpenseDataset, ForecastConfig, ForecastMethod, Forecaster, SeasonalFactors,
};

/// The sample dataset as a JSON file body, in a deliberately non-alphabetical order
fn expense_json() -> &'static str {
    r#"{
    "Office Supplies": [120, 110, 150, 130, 140],
    "Marketing": [200, 240, 220, 210, 230],
    "Utilities": [90, 95, 100, 85, 90],
    "Rent": [1000, 1000, 1000, 1000, 1000]
}"#
}

// =============================================================================
// Workflow Tests
// =============================================================================

#[test]
fn test_json_file_matches_sample() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("expenses.json");
    fs::write(&path, expense_json()).unwrap();

    let data = load_dataset(&path).expect("Failed to load dataset");
    assert_eq!(data, ExpenseDataset::sample());
}

#[test]
fn test_full_simple_workflow() {
    let data = ExpenseDataset::sample();

    validate(&data).expect("Sample should validate");
    let result = forecast(&data, ForecastMethod::Simple);

    let pairs: Vec<(&str, f64)> = result.iter().collect();
    assert_eq!(
        pairs,
        vec![
            ("Office Supplies", 140.0),
            ("Marketing", 220.0),
            ("Utilities", 91.67),
            ("Rent", 1000.0),
        ]
    );
}

#[test]
fn test_full_weighted_workflow_from_csv() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("expenses.csv");
    fs::write(
        &path,
        "category,m1,m2,m3,m4,m5\n\
         Office Supplies,120,110,150,130,140\n\
         Marketing,200,240,220,210,230\n",
    )
    .unwrap();

    let data = load_dataset(&path).unwrap();
    let result = calculate(&data, ForecastMethod::Weighted).unwrap();

    assert_eq!(result.len(), 2);
    assert_eq!(result.get("Office Supplies"), Some(139.0));
    assert_eq!(result.get("Marketing"), Some(222.0));
}

#[test]
fn test_validation_aborts_whole_calculation() {
    let mut data = ExpenseDataset::sample();
    data.insert("X", vec![5.0, 10.0]).unwrap();
    data.insert("Y", vec![1.0]).unwrap();

    let err = calculate(&data, ForecastMethod::Simple).unwrap_err();
    assert_eq!(err.to_string(), "Need at least 3 months of data for X");
}

#[test]
fn test_only_last_three_months_matter() {
    let mut short = ExpenseDataset::new();
    short.insert("Dining", vec![80.0, 95.0, 70.0]).unwrap();

    let mut long = ExpenseDataset::new();
    long.insert("Dining", vec![500.0, 1.0, 42.0, 80.0, 95.0, 70.0])
        .unwrap();

    for method in [ForecastMethod::Simple, ForecastMethod::Weighted] {
        assert_eq!(forecast(&short, method), forecast(&long, method));
    }
}

#[test]
fn test_editing_then_forecasting() {
    let mut data = ExpenseDataset::new();
    data.insert_blank("Insurance").unwrap();
    data.set_month("Insurance", 0, 300.0).unwrap();
    data.set_month("Insurance", 1, 300.0).unwrap();
    data.set_month("Insurance", 2, 300.0).unwrap();
    data.push_month("Insurance", 360.0).unwrap();

    // Window is [300, 300, 360]
    let result = calculate(&data, ForecastMethod::Weighted).unwrap();
    assert_eq!(result.get("Insurance"), Some(330.0));
}

// =============================================================================
// Configuration Tests
// =============================================================================

#[test]
fn test_strict_config_rejects_short_history() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("forecast.toml");
    fs::write(&path, "[forecast]\nmethod = \"weighted\"\nstrict = true\n").unwrap();

    let config = ForecastConfig::load(Some(&path)).unwrap();
    let forecaster = Forecaster::from_config(&config);

    let mut data = ExpenseDataset::new();
    data.insert("X", vec![5.0, 10.0]).unwrap();

    assert!(matches!(
        forecaster.forecast(&data),
        Err(Error::Validation(ref c)) if c == "X"
    ));

    // Same data, lenient forecaster
    let lenient = forecaster.with_strict(false).forecast(&data).unwrap();
    assert_eq!(lenient.get("X"), Some(4.0));
}

#[test]
fn test_adjusted_forecast_keeps_categories() {
    let base = calculate(&ExpenseDataset::sample(), ForecastMethod::Weighted).unwrap();
    let indicators = EconomicIndicators {
        inflation_rate: 2.5,
        seasonal: SeasonalFactors::flat(),
    };

    let adjusted = adjust(&base, &indicators, 6).unwrap();

    assert_eq!(adjusted.len(), base.len());
    assert_eq!(adjusted.get("Rent"), Some(1025.0));
    assert!(adjusted.total() > base.total());
}
