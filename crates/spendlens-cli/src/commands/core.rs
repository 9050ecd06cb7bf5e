//! Shared command utilities

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use spendlens_core::{ConfigSource, DashboardConfig, Timeframe};

/// Load config from --config or the default locations
pub fn load_config(path: Option<&Path>) -> Result<(DashboardConfig, ConfigSource)> {
    let (config, source) = DashboardConfig::load(path).context("Failed to load configuration")?;
    tracing::debug!(source = %source, "Configuration loaded");
    Ok((config, source))
}

/// Parse --date, defaulting to today's local date
pub fn resolve_date(date: Option<&str>) -> Result<NaiveDate> {
    match date {
        Some(d) => NaiveDate::parse_from_str(d, "%Y-%m-%d")
            .context("Invalid --date format (use YYYY-MM-DD)"),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

/// Parse a stats timeframe (week, month, year)
pub fn parse_timeframe(s: &str) -> Result<Timeframe> {
    let timeframe: Timeframe = s.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    if timeframe == Timeframe::All {
        anyhow::bail!("Stats need a bounded timeframe: week, month, or year");
    }
    Ok(timeframe)
}
