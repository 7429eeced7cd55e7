//! Forecast and validate command implementations

use std::fmt::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Datelike;
use outlay_core::{
    adjust, calculate, load_dataset, validate, ExpenseDataset, ForecastConfig, ForecastMethod,
    ForecastResult, Forecaster,
};
use tracing::{debug, info};

use super::truncate;

/// Outcome of a forecast run, ready for display
#[derive(Debug)]
pub struct ForecastRun {
    pub method: ForecastMethod,
    /// Month the economic adjustment targeted, if one was applied
    pub adjusted_for: Option<u32>,
    pub result: ForecastResult,
}

/// Load the dataset from `input`, or fall back to the sample dataset
pub fn load_input(input: Option<&Path>) -> Result<ExpenseDataset> {
    match input {
        Some(path) => load_dataset(path)
            .with_context(|| format!("Failed to load dataset from {}", path.display())),
        None => {
            info!("No input file given, using the sample dataset");
            Ok(ExpenseDataset::sample())
        }
    }
}

/// Resolve the method: command line first, then config
pub fn resolve_method(config: &ForecastConfig, method: Option<&str>) -> Result<ForecastMethod> {
    match method {
        Some(m) => m.parse::<ForecastMethod>().map_err(anyhow::Error::msg),
        None => Ok(config.method),
    }
}

/// Validate, forecast, and optionally adjust.
///
/// With `skip_validation` the configured [`Forecaster`] runs directly, so short
/// histories are averaged unless the config sets `strict = true`.
pub fn run_forecast(
    config: &ForecastConfig,
    data: &ExpenseDataset,
    method: ForecastMethod,
    adjust_requested: bool,
    month: Option<u32>,
    skip_validation: bool,
) -> Result<ForecastRun> {
    let result = if skip_validation {
        Forecaster::from_config(config)
            .with_method(method)
            .forecast(data)?
    } else {
        calculate(data, method)?
    };

    let adjusted_for = if adjust_requested || config.adjustment.enabled {
        let month = month.unwrap_or_else(|| chrono::Local::now().month());
        debug!(month, "Adjusting forecast");
        Some(month)
    } else {
        None
    };

    let result = match adjusted_for {
        Some(month) => adjust(&result, &config.adjustment.indicators, month)?,
        None => result,
    };

    Ok(ForecastRun {
        method,
        adjusted_for,
        result,
    })
}

pub fn cmd_forecast(
    config: &ForecastConfig,
    input: Option<&Path>,
    method: Option<&str>,
    adjust_requested: bool,
    month: Option<u32>,
    skip_validation: bool,
    json: bool,
) -> Result<()> {
    let data = load_input(input)?;
    let method = resolve_method(config, method)?;
    let run = run_forecast(
        config,
        &data,
        method,
        adjust_requested,
        month,
        skip_validation,
    )?;

    print!("{}", render_forecast(&run, json)?);
    Ok(())
}

/// Render a forecast run as a table, or as a JSON object in category order
pub fn render_forecast(run: &ForecastRun, json: bool) -> Result<String> {
    if json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(&run.result)?));
    }

    let mut out = String::new();
    writeln!(out)?;
    writeln!(out, "📈 Next-Month Forecast")?;
    writeln!(out, "   Method: {}", run.method.label())?;
    if let Some(month) = run.adjusted_for {
        writeln!(out, "   Adjusted for inflation and season (month {})", month)?;
    }
    writeln!(out, "   ─────────────────────────────────────────────")?;

    if run.result.is_empty() {
        writeln!(out, "   No categories to forecast.")?;
        return Ok(out);
    }

    writeln!(out, "   {:28} │ {:>12}", "Category", "Forecast")?;
    writeln!(out, "   ─────────────────────────────┼─────────────")?;
    for (category, value) in run.result.iter() {
        writeln!(
            out,
            "   {:28} │ {:>12}",
            truncate(category, 28),
            format!("${:.2}", value)
        )?;
    }
    writeln!(out, "   ─────────────────────────────┼─────────────")?;
    writeln!(
        out,
        "   {:28} │ {:>12}",
        "Total",
        format!("${:.2}", run.result.total())
    )?;
    Ok(out)
}

pub fn cmd_validate(input: &Path) -> Result<()> {
    let data = load_dataset(input)
        .with_context(|| format!("Failed to load dataset from {}", input.display()))?;

    validate(&data)?;

    println!(
        "✅ {} categories, each with at least {} months of data",
        data.len(),
        outlay_core::MIN_MONTHS
    );
    Ok(())
}
