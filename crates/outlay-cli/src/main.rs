//! Outlay CLI - Expense forecasting
//!
//! Usage:
//!   outlay forecast --input expenses.json --method weighted
//!   outlay validate --input expenses.csv
//!   outlay sample --format csv

mod cli;
mod commands;


use anyhow::{Context, Result};
use clap::Parser;
use outlay_core::ForecastConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact().with_writer(std::io::stderr))
        .init();

    let config =
        ForecastConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command {
        Commands::Forecast {
            input,
            method,
            adjust,
            month,
            skip_validation,
            json,
        } => commands::cmd_forecast(
            &config,
            input.as_deref(),
            method.as_deref(),
            adjust,
            month,
            skip_validation,
            json,
        ),
        Commands::Validate { input } => commands::cmd_validate(&input),
        Commands::Sample { format } => commands::cmd_sample(&format),
    }
}
