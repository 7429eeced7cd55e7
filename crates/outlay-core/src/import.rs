//! Dataset loaders
//!
//! Supported formats:
//! - JSON: an object of category name to an array of monthly amounts
//! - CSV: one row per category, `category,month1,month2,...`
//!
//! An optional CSV header row is recognised by a first cell of `category`.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::models::ExpenseDataset;

/// Dataset file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Json,
    Csv,
}

impl DatasetFormat {
    /// Detect format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "json" => Some(DatasetFormat::Json),
            "csv" => Some(DatasetFormat::Csv),
            _ => None,
        }
    }
}

/// Load a dataset from disk, picking the parser by extension
pub fn load_dataset(path: &Path) -> Result<ExpenseDataset> {
    let format = DatasetFormat::from_path(path).ok_or_else(|| {
        Error::InvalidData(format!(
            "Unsupported dataset file {} (expected .json or .csv)",
            path.display()
        ))
    })?;

    let file = File::open(path)?;
    let data = match format {
        DatasetFormat::Json => parse_json(file)?,
        DatasetFormat::Csv => parse_csv(file)?,
    };

    debug!(
        path = %path.display(),
        categories = data.len(),
        "Loaded dataset"
    );
    Ok(data)
}

/// Parse a JSON object of category → monthly amounts, keeping document order
pub fn parse_json<R: Read>(reader: R) -> Result<ExpenseDataset> {
    Ok(serde_json::from_reader(reader)?)
}

/// Parse CSV rows of `category,month1,month2,...`
pub fn parse_csv<R: Read>(reader: R) -> Result<ExpenseDataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut data = ExpenseDataset::new();

    for (idx, record) in rdr.records().enumerate() {
        let record = record?;
        let line = idx + 1;

        let Some(name) = record.get(0) else {
            continue;
        };
        if idx == 0 && name.eq_ignore_ascii_case("category") {
            continue; // header row
        }
        if name.is_empty() && record.iter().all(|cell| cell.is_empty()) {
            continue; // blank line
        }

        let months = record
            .iter()
            .skip(1)
            .enumerate()
            .map(|(col, cell)| parse_amount(cell, line, col + 1))
            .collect::<Result<Vec<f64>>>()?;

        data.insert(name, months)?;
    }

    Ok(data)
}

/// Write a dataset as CSV rows that [`parse_csv`] reads back.
///
/// A `category,month_1,...` header sized to the longest history comes first.
pub fn write_csv<W: Write>(data: &ExpenseDataset, writer: W) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().flexible(true).from_writer(writer);

    let widest = data.iter().map(|s| s.months().len()).max().unwrap_or(0);
    let mut header = vec!["category".to_string()];
    header.extend((1..=widest).map(|m| format!("month_{}", m)));
    wtr.write_record(&header)?;

    for series in data.iter() {
        let mut row = vec![series.name().to_string()];
        row.extend(series.months().iter().map(|v| v.to_string()));
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Parse an amount cell, tolerating a leading `$` and thousands separators
fn parse_amount(cell: &str, line: usize, month: usize) -> Result<f64> {
    let cleaned: String = cell
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();

    let not_a_number = || {
        Error::InvalidData(format!(
            "Line {}: month {} is not a number: {:?}",
            line, month, cell
        ))
    };

    // `f64::from_str` accepts NaN and infinities
    let value = cleaned.parse::<f64>().map_err(|_| not_a_number())?;
    if !value.is_finite() {
        return Err(not_a_number());
    }
    Ok(value)
}
