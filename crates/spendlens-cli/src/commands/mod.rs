//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Shared utilities (config loading, date/timeframe parsing)
//! - `insights` - Offline predictive report from a saved payload
//! - `dashboard` - Live dashboard fetched from the API
//! - `config` - Effective configuration display

pub mod config;
pub mod core;
pub mod dashboard;
pub mod insights;

// Re-export command functions for main.rs
pub use config::*;
pub use core::*;
pub use dashboard::*;
pub use insights::*;

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Format an amount with the configured currency symbol
pub fn money(currency: &str, amount: f64) -> String {
    format!("{}{:.2}", currency, amount)
}
