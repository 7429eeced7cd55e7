//! Economic adjustment of forecasts
//!
//! Scales a moving-average forecast by an expected inflation rate and a
//! quarter-based seasonal factor:
//!
//! ```text
//! adjusted = forecast × (1 + inflation_rate / 100) × seasonal_factor(month)
//! ```

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::forecast::round_to_cents;
use crate::models::ForecastResult;

/// Spending multipliers by calendar quarter
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SeasonalFactors {
    pub q1: f64,
    pub q2: f64,
    pub q3: f64,
    pub q4: f64,
}

impl Default for SeasonalFactors {
    fn default() -> Self {
        Self {
            q1: 0.95, // post-holiday slowdown
            q2: 1.0,
            q3: 1.0,
            q4: 1.15, // holiday season
        }
    }
}

impl SeasonalFactors {
    /// No seasonal effect in any quarter
    pub fn flat() -> Self {
        Self {
            q1: 1.0,
            q2: 1.0,
            q3: 1.0,
            q4: 1.0,
        }
    }

    /// Factor for a calendar month (1-12)
    pub fn for_month(&self, month: u32) -> Result<f64> {
        match month {
            1..=3 => Ok(self.q1),
            4..=6 => Ok(self.q2),
            7..=9 => Ok(self.q3),
            10..=12 => Ok(self.q4),
            _ => Err(Error::InvalidData(format!(
                "Month must be between 1 and 12, got {}",
                month
            ))),
        }
    }
}

/// External economic inputs applied on top of a forecast
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EconomicIndicators {
    /// Annual inflation rate in percent
    pub inflation_rate: f64,
    pub seasonal: SeasonalFactors,
}

impl Default for EconomicIndicators {
    fn default() -> Self {
        Self {
            inflation_rate: 2.5,
            seasonal: SeasonalFactors::default(),
        }
    }
}

impl EconomicIndicators {
    /// Combined multiplier for a forecast targeting `month`
    pub fn multiplier(&self, month: u32) -> Result<f64> {
        let seasonal = self.seasonal.for_month(month)?;
        Ok((1.0 + self.inflation_rate / 100.0) * seasonal)
    }
}

/// Apply `indicators` to every category of `result` for a forecast month.
///
/// Categories and their order are unchanged; values are re-rounded to cents.
pub fn adjust(
    result: &ForecastResult,
    indicators: &EconomicIndicators,
    month: u32,
) -> Result<ForecastResult> {
    let multiplier = indicators.multiplier(month)?;
    debug!(
        month,
        inflation_rate = indicators.inflation_rate,
        multiplier,
        "Applying economic adjustment"
    );

    let mut adjusted = ForecastResult::with_capacity(result.len());
    for (category, value) in result.iter() {
        adjusted.push(category, round_to_cents(value * multiplier));
    }
    Ok(adjusted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::forecast;
    use crate::models::{ExpenseDataset, ForecastMethod};

    #[test]
    fn test_seasonal_factor_by_quarter() {
        let factors = SeasonalFactors::default();
        assert_eq!(factors.for_month(1).unwrap(), 0.95);
        assert_eq!(factors.for_month(3).unwrap(), 0.95);
        assert_eq!(factors.for_month(5).unwrap(), 1.0);
        assert_eq!(factors.for_month(8).unwrap(), 1.0);
        assert_eq!(factors.for_month(12).unwrap(), 1.15);
    }

    #[test]
    fn test_seasonal_factor_rejects_bad_month() {
        let factors = SeasonalFactors::default();
        assert!(factors.for_month(0).is_err());
        assert!(factors.for_month(13).is_err());
    }

    #[test]
    fn test_adjust_identity_without_inflation() {
        let base = forecast(&ExpenseDataset::sample(), ForecastMethod::Simple);
        let indicators = EconomicIndicators {
            inflation_rate: 0.0,
            seasonal: SeasonalFactors::default(),
        };

        // Q2 has no seasonal effect
        let adjusted = adjust(&base, &indicators, 5).unwrap();
        assert_eq!(adjusted, base);
    }

    #[test]
    fn test_adjust_applies_inflation_and_season() {
        let base = forecast(&ExpenseDataset::sample(), ForecastMethod::Weighted);
        let indicators = EconomicIndicators {
            inflation_rate: 10.0,
            seasonal: SeasonalFactors::flat(),
        };

        let adjusted = adjust(&base, &indicators, 7).unwrap();
        assert_eq!(adjusted.get("Rent"), Some(1100.0));
        assert_eq!(adjusted.get("Utilities"), Some(99.55));

        let names: Vec<&str> = adjusted.iter().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            vec!["Office Supplies", "Marketing", "Utilities", "Rent"]
        );
    }

    #[test]
    fn test_adjust_holiday_quarter() {
        let base = forecast(&ExpenseDataset::sample(), ForecastMethod::Simple);
        let indicators = EconomicIndicators {
            inflation_rate: 0.0,
            seasonal: SeasonalFactors::default(),
        };

        let adjusted = adjust(&base, &indicators, 11).unwrap();
        assert_eq!(adjusted.get("Rent"), Some(1150.0));
    }
}
