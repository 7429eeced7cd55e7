//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `forecast` - Forecast and validate commands
//! - `sample` - Print the sample dataset

pub mod forecast;
pub mod sample;

// Re-export command functions for main.rs
pub use forecast::*;
pub use sample::*;

/// Truncate a string to a maximum number of characters, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
