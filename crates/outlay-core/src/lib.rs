//! Outlay Core Library
//!
//! Next-month expense forecasting per category:
//! - Ordered expense datasets and forecast results
//! - Validation (at least three months per category)
//! - Simple and weighted three-month moving averages
//! - Optional inflation and seasonal adjustment
//! - Configuration with embedded defaults and user overrides
//! - JSON and CSV dataset loaders
//!
//! ## Usage
//!
//! ```rust
//! use outlay_core::{calculate, ExpenseDataset, ForecastMethod};
//!
//! let data = ExpenseDataset::sample();
//! let result = calculate(&data, ForecastMethod::Weighted).unwrap();
//! assert_eq!(result.get("Office Supplies"), Some(139.0));
//! ```

pub mod adjust;
pub mod config;
pub mod error;
pub mod forecast;
pub mod import;
pub mod models;
pub mod validate;

pub use adjust::{adjust, EconomicIndicators, SeasonalFactors};
pub use config::{AdjustmentConfig, ForecastConfig};
pub use error::{Error, Result};
pub use forecast::{calculate, forecast, round_to_cents, Forecaster};
pub use import::{load_dataset, parse_csv, parse_json, DatasetFormat};
pub use models::{CategorySeries, ExpenseDataset, ForecastMethod, ForecastResult};
pub use validate::{validate, MIN_MONTHS};
