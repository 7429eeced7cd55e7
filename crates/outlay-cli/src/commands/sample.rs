//! Sample dataset command

use anyhow::Result;
use outlay_core::{import::write_csv, ExpenseDataset};

pub fn cmd_sample(format: &str) -> Result<()> {
    print!("{}", render_sample(format)?);
    Ok(())
}

/// Render the sample dataset in `format` (json or csv)
pub fn render_sample(format: &str) -> Result<String> {
    let data = ExpenseDataset::sample();

    match format.to_lowercase().as_str() {
        "json" => Ok(format!("{}\n", serde_json::to_string_pretty(&data)?)),
        "csv" => {
            let mut buf = Vec::new();
            write_csv(&data, &mut buf)?;
            Ok(String::from_utf8(buf)?)
        }
        _ => anyhow::bail!("Unknown format: {}. Available: json, csv", format),
    }
}
