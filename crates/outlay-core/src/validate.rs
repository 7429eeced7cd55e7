//! Input validation
//!
//! A forecast needs a full window of history for every category. Validation
//! stops at the first category that falls short so nothing is partially computed.

use tracing::debug;

use crate::error::{Error, Result};
use crate::models::ExpenseDataset;

/// Minimum months of history per category (the moving-average window)
pub const MIN_MONTHS: usize = 3;

/// Check that every category has at least [`MIN_MONTHS`] months.
///
/// Fails with [`Error::Validation`] naming the first short category in
/// insertion order.
pub fn validate(data: &ExpenseDataset) -> Result<()> {
    for series in data.iter() {
        if series.months().len() < MIN_MONTHS {
            debug!(
                category = series.name(),
                months = series.months().len(),
                "Insufficient history"
            );
            return Err(Error::Validation(series.name().to_string()));
        }
    }
    Ok(())
}
