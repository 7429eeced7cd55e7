//! Error types for Outlay

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A category has fewer months than the forecast window needs.
    /// The message is shown to the user as-is.
    #[error("Need at least 3 months of data for {0}")]
    Validation(String),

    #[error("Category already exists: {0}")]
    DuplicateCategory(String),

    #[error("Category name must not be empty")]
    EmptyCategoryName,

    #[error("Category {0} must have at least one month of data")]
    EmptySeries(String),

    #[error("Category {category} cannot drop below {minimum} months")]
    MinimumMonths { category: String, minimum: usize },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
