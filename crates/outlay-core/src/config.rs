//! Forecast configuration
//!
//! ## Configuration Resolution
//!
//! Config is loaded with a two-layer resolution:
//! 1. Explicit path, or the override in the data dir
//!    (~/.local/share/outlay/config/forecast.toml)
//! 2. Fall back to embedded defaults (compiled into binary)
//!
//! A missing explicit path is logged as a warning. A missing data-dir override
//! is the normal case and falls back silently.
//!
//! Every key is optional; missing keys keep their default value.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::adjust::{EconomicIndicators, SeasonalFactors};
use crate::error::{Error, Result};
use crate::models::ForecastMethod;

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/forecast.toml");

/// Economic adjustment settings
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AdjustmentConfig {
    /// Adjust every forecast without being asked
    pub enabled: bool,
    pub indicators: EconomicIndicators,
}

/// Resolved forecast configuration
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ForecastConfig {
    /// Method used when none is given on the command line
    pub method: ForecastMethod,
    /// Reject short histories instead of averaging what is there
    pub strict: bool,
    pub adjustment: AdjustmentConfig,
}

impl ForecastConfig {
    /// Load from `path` if given, otherwise from the default override location
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let content = match path {
            Some(path) => read_explicit(path)?,
            None => read_override(default_config_path().as_deref())?,
        };
        parse_config(&content)
    }

    /// Parse config from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        parse_config(content)
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("outlay").join("config").join("forecast.toml"))
}

fn read_file(path: &Path) -> Result<String> {
    debug!(path = %path.display(), "Loading config override");
    fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))
}

/// Config file named on the command line
fn read_explicit(path: &Path) -> Result<String> {
    if path.exists() {
        read_file(path)
    } else {
        warn!(path = %path.display(), "Config file not found, using defaults");
        Ok(DEFAULT_CONFIG.to_string())
    }
}

/// Optional override in the data dir
fn read_override(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path.exists() => read_file(path),
        _ => Ok(DEFAULT_CONFIG.to_string()),
    }
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    forecast: Option<RawForecast>,
    adjustment: Option<RawAdjustment>,
}

#[derive(Debug, Deserialize)]
struct RawForecast {
    method: Option<ForecastMethod>,
    strict: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct RawAdjustment {
    enabled: Option<bool>,
    inflation_rate: Option<f64>,
    /// Quarters left out keep their default factor
    seasonal: Option<SeasonalFactors>,
}

fn parse_config(content: &str) -> Result<ForecastConfig> {
    let raw: RawConfig = toml::from_str(content)
        .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

    let mut config = ForecastConfig::default();

    if let Some(forecast) = raw.forecast {
        if let Some(method) = forecast.method {
            config.method = method;
        }
        if let Some(strict) = forecast.strict {
            config.strict = strict;
        }
    }

    if let Some(adjustment) = raw.adjustment {
        if let Some(enabled) = adjustment.enabled {
            config.adjustment.enabled = enabled;
        }
        if let Some(rate) = adjustment.inflation_rate {
            config.adjustment.indicators.inflation_rate = rate;
        }
        if let Some(seasonal) = adjustment.seasonal {
            for value in [seasonal.q1, seasonal.q2, seasonal.q3, seasonal.q4] {
                if value < 0.0 {
                    return Err(Error::Config(format!(
                        "Seasonal factor must not be negative, got {}",
                        value
                    )));
                }
            }
            config.adjustment.indicators.seasonal = seasonal;
        }
    }

    Ok(config)
}
