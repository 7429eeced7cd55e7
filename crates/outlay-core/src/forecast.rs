//! Expense Forecaster
//!
//! Projects next month's expense for each category from the three most recent
//! months:
//! - Simple moving average: plain mean of the window
//! - Weighted moving average: 20% / 30% / 50% from oldest to newest
//!
//! Forecasting does not re-validate. A category shorter than the window is
//! averaged over whatever months it has: the simple average still divides by
//! three, and the weighted average applies weights from the oldest slot onward.
//! [`Forecaster`] with `strict` enabled rejects such input instead.

use tracing::debug;

use crate::config::ForecastConfig;
use crate::error::Result;
use crate::models::{ExpenseDataset, ForecastMethod, ForecastResult};
use crate::validate::{validate, MIN_MONTHS};

/// Number of trailing months averaged
pub const WINDOW: usize = MIN_MONTHS;

/// Weights for the window, oldest month first
pub const WEIGHTS: [f64; WINDOW] = [0.2, 0.3, 0.5];

/// Round half away from zero to two decimal places
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// The last `WINDOW` months in chronological order (fewer if the history is short)
fn trailing_window(months: &[f64]) -> &[f64] {
    &months[months.len().saturating_sub(WINDOW)..]
}

/// Mean of the trailing window, rounded to cents
pub fn simple_moving_average(months: &[f64]) -> f64 {
    let sum: f64 = trailing_window(months).iter().sum();
    round_to_cents(sum / WINDOW as f64)
}

/// Weighted sum of the trailing window, rounded to cents
pub fn weighted_moving_average(months: &[f64]) -> f64 {
    let weighted = trailing_window(months)
        .iter()
        .zip(WEIGHTS.iter())
        .fold(0.0, |acc, (value, weight)| acc + value * weight);
    round_to_cents(weighted)
}

/// Forecast every category in `data` with `method`.
///
/// The result has exactly the input's categories, in the same order.
pub fn forecast(data: &ExpenseDataset, method: ForecastMethod) -> ForecastResult {
    let mut result = ForecastResult::with_capacity(data.len());

    for series in data.iter() {
        let value = match method {
            ForecastMethod::Simple => simple_moving_average(series.months()),
            ForecastMethod::Weighted => weighted_moving_average(series.months()),
        };
        debug!(category = series.name(), %method, value, "Forecast computed");
        result.push(series.name(), value);
    }

    result
}

/// Validate and forecast in one step.
///
/// This is the boundary the front end calls: either every category gets a
/// forecast or the first validation failure is returned.
pub fn calculate(data: &ExpenseDataset, method: ForecastMethod) -> Result<ForecastResult> {
    validate(data)?;
    Ok(forecast(data, method))
}

/// Configured forecaster
#[derive(Debug, Clone, Copy, Default)]
pub struct Forecaster {
    method: ForecastMethod,
    /// Reject categories shorter than the window instead of averaging what is there
    strict: bool,
}

impl Forecaster {
    pub fn new(method: ForecastMethod) -> Self {
        Self {
            method,
            strict: false,
        }
    }

    pub fn from_config(config: &ForecastConfig) -> Self {
        Self {
            method: config.method,
            strict: config.strict,
        }
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_method(mut self, method: ForecastMethod) -> Self {
        self.method = method;
        self
    }

    pub fn method(&self) -> ForecastMethod {
        self.method
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn forecast(&self, data: &ExpenseDataset) -> Result<ForecastResult> {
        if self.strict {
            validate(data)?;
        }
        Ok(forecast(data, self.method))
    }
}
