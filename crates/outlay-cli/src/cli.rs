//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Outlay - Forecast next month's expenses
#[derive(Parser)]
#[command(name = "outlay")]
#[command(about = "Next-month expense forecasting from monthly history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to ~/.local/share/outlay/config/forecast.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Forecast next month's expense for every category
    Forecast {
        /// Dataset file (.json or .csv); uses the sample dataset if omitted
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Forecast method: simple, weighted (defaults to the config)
        #[arg(short, long)]
        method: Option<String>,

        /// Apply inflation and seasonal adjustment
        ///
        /// Always on when `[adjustment] enabled = true` in the config.
        #[arg(long)]
        adjust: bool,

        /// Month being forecast (1-12) for the seasonal factor; defaults to the current month
        #[arg(long)]
        month: Option<u32>,

        /// Forecast without the three-month minimum check
        ///
        /// Short histories are averaged over the months they have, unless the
        /// config sets `strict = true`.
        #[arg(long)]
        skip_validation: bool,

        /// Output JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Check that every category has enough history to forecast
    Validate {
        /// Dataset file (.json or .csv)
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Print the sample dataset
    Sample {
        /// Output format: json, csv
        #[arg(short, long, default_value = "json")]
        format: String,
    },
}
