//! Dashboard configuration
//!
//! Config is loaded with a two-layer resolution:
//! 1. An explicit path, or the override in the data dir
//!    (~/.local/share/spendlens/config.toml)
//! 2. Fall back to embedded defaults (compiled into binary)
//!
//! `SPENDLENS_API_URL` overrides `api.base_url` after the file is read.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::insights::{ForecastComparator, TrendAnalyzer};

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/dashboard.toml");

/// Environment variable overriding the API base URL
pub const API_URL_ENV: &str = "SPENDLENS_API_URL";

/// Dashboard API connection settings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            timeout: Duration::from_secs(15),
        }
    }
}

/// Thresholds for trend and forecast classification
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightSettings {
    pub trend_window: usize,
    pub trend_threshold_pct: f64,
    pub forecast_threshold_pct: f64,
}

impl Default for InsightSettings {
    fn default() -> Self {
        Self {
            trend_window: 3,
            trend_threshold_pct: 15.0,
            forecast_threshold_pct: 10.0,
        }
    }
}

impl InsightSettings {
    pub fn trend_analyzer(&self) -> TrendAnalyzer {
        TrendAnalyzer::with_thresholds(self.trend_window, self.trend_threshold_pct)
    }

    pub fn forecast_comparator(&self) -> ForecastComparator {
        ForecastComparator::with_threshold(self.forecast_threshold_pct)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetSettings {
    /// Utilization (percent) above which a budget is "near" its limit
    pub near_limit_pct: f64,
}

impl Default for BudgetSettings {
    fn default() -> Self {
        Self {
            near_limit_pct: 80.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplaySettings {
    pub currency_symbol: String,
    /// Divisor turning a monthly total into a weekly average
    pub weeks_per_month: f64,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".to_string(),
            weeks_per_month: 4.33,
        }
    }
}

/// Where the active configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Embedded,
    File(PathBuf),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Embedded => write!(f, "embedded defaults"),
            ConfigSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Full dashboard configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DashboardConfig {
    pub api: ApiConfig,
    pub insights: InsightSettings,
    pub budgets: BudgetSettings,
    pub display: DisplaySettings,
}

impl DashboardConfig {
    /// Load from `path` (or the default override location), falling back to
    /// the embedded defaults, then apply environment overrides
    pub fn load(path: Option<&Path>) -> Result<(Self, ConfigSource)> {
        let (mut config, source) = load_config(path)?;
        config.apply_env_overrides(std::env::var(API_URL_ENV).ok());
        Ok((config, source))
    }

    /// Apply the value of `SPENDLENS_API_URL`; blank values are ignored
    pub fn apply_env_overrides(&mut self, api_url: Option<String>) {
        if let Some(url) = api_url {
            let url = url.trim();
            if !url.is_empty() {
                tracing::debug!(url = %url, "API URL overridden from environment");
                self.api.base_url = url.to_string();
            }
        }
    }

    /// Parse a TOML document on top of the built-in defaults
    pub fn from_toml(content: &str) -> Result<Self> {
        parse_config(content)
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("spendlens").join("config.toml"))
}

/// Load configuration (override first, then default)
fn load_config(override_path: Option<&Path>) -> Result<(DashboardConfig, ConfigSource)> {
    let path = match override_path {
        Some(path) => Some(path.to_path_buf()),
        None => default_config_path(),
    };

    if let Some(path) = path {
        if path.exists() {
            tracing::debug!(path = %path.display(), "Reading config file");
            let content = fs::read_to_string(&path)?;
            let config = parse_config(&content)?;
            return Ok((config, ConfigSource::File(path)));
        }
        if override_path.is_some() {
            tracing::warn!(path = %path.display(), "Config file not found, using defaults");
        }
    }

    Ok((parse_config(DEFAULT_CONFIG)?, ConfigSource::Embedded))
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    api: Option<RawApi>,
    insights: Option<RawInsights>,
    budgets: Option<RawBudgets>,
    display: Option<RawDisplay>,
}

#[derive(Debug, Deserialize)]
struct RawApi {
    base_url: Option<String>,
    timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct RawInsights {
    trend_window: Option<usize>,
    trend_threshold_pct: Option<f64>,
    forecast_threshold_pct: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawBudgets {
    near_limit_pct: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawDisplay {
    currency_symbol: Option<String>,
    weeks_per_month: Option<f64>,
}

/// Parse config from TOML content
fn parse_config(content: &str) -> Result<DashboardConfig> {
    let raw: RawConfig = toml::from_str(content)
        .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

    let mut config = DashboardConfig::default();

    if let Some(api) = raw.api {
        if let Some(url) = api.base_url {
            config.api.base_url = url;
        }
        if let Some(secs) = api.timeout_secs {
            config.api.timeout = Duration::from_secs(secs);
        }
    }

    if let Some(insights) = raw.insights {
        if let Some(window) = insights.trend_window {
            if window < 2 {
                return Err(Error::Config(format!(
                    "insights.trend_window must be at least 2, got {}",
                    window
                )));
            }
            config.insights.trend_window = window;
        }
        if let Some(pct) = insights.trend_threshold_pct {
            config.insights.trend_threshold_pct = non_negative("insights.trend_threshold_pct", pct)?;
        }
        if let Some(pct) = insights.forecast_threshold_pct {
            config.insights.forecast_threshold_pct =
                non_negative("insights.forecast_threshold_pct", pct)?;
        }
    }

    if let Some(budgets) = raw.budgets {
        if let Some(pct) = budgets.near_limit_pct {
            config.budgets.near_limit_pct = non_negative("budgets.near_limit_pct", pct)?;
        }
    }

    if let Some(display) = raw.display {
        if let Some(symbol) = display.currency_symbol {
            config.display.currency_symbol = symbol;
        }
        if let Some(weeks) = display.weeks_per_month {
            if weeks <= 0.0 {
                return Err(Error::Config(format!(
                    "display.weeks_per_month must be positive, got {}",
                    weeks
                )));
            }
            config.display.weeks_per_month = weeks;
        }
    }

    Ok(config)
}

fn non_negative(key: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(Error::Config(format!(
            "{} must be a non-negative number, got {}",
            key, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_default_config() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = DashboardConfig::from_toml(
            r#"
            [insights]
            trend_threshold_pct = 20.0

            [display]
            currency_symbol = "$"
            "#,
        )
        .unwrap();

        assert_eq!(config.insights.trend_threshold_pct, 20.0);
        assert_eq!(config.insights.trend_window, 3);
        assert_eq!(config.insights.forecast_threshold_pct, 10.0);
        assert_eq!(config.display.currency_symbol, "$");
        assert_eq!(config.display.weeks_per_month, 4.33);
        assert_eq!(config.api, ApiConfig::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(DashboardConfig::from_toml("[insights]\ntrend_window = 1").is_err());
        assert!(DashboardConfig::from_toml("[display]\nweeks_per_month = 0.0").is_err());
        assert!(DashboardConfig::from_toml("not = [valid").is_err());
    }

    #[test]
    fn test_negative_thresholds_rejected() {
        for doc in [
            "[insights]\ntrend_threshold_pct = -15.0",
            "[insights]\nforecast_threshold_pct = -10.0",
            "[budgets]\nnear_limit_pct = -80.0",
        ] {
            let err = DashboardConfig::from_toml(doc).unwrap_err();
            assert!(matches!(err, Error::Config(_)), "{}", doc);
        }
        // Zero is a valid (strict) threshold
        let config = DashboardConfig::from_toml("[insights]\ntrend_threshold_pct = 0.0").unwrap();
        assert_eq!(config.insights.trend_threshold_pct, 0.0);
    }

    #[test]
    fn test_env_override_replaces_base_url() {
        let mut config = DashboardConfig::from_toml("[api]\nbase_url = \"http://file.local\"").unwrap();

        config.apply_env_overrides(None);
        assert_eq!(config.api.base_url, "http://file.local");

        config.apply_env_overrides(Some("   ".to_string()));
        assert_eq!(config.api.base_url, "http://file.local");

        config.apply_env_overrides(Some(" http://env.local:9000 ".to_string()));
        assert_eq!(config.api.base_url, "http://env.local:9000");
    }

    #[test]
    fn test_unreadable_config_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory exists but cannot be read as a file
        let err = load_config(Some(dir.path())).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api]\nbase_url = \"http://budget.local:8080\"\ntimeout_secs = 3").unwrap();

        let (config, source) = load_config(Some(file.path())).unwrap();
        assert_eq!(config.api.base_url, "http://budget.local:8080");
        assert_eq!(config.api.timeout, Duration::from_secs(3));
        assert_eq!(source, ConfigSource::File(file.path().to_path_buf()));
    }

    #[test]
    fn test_missing_file_falls_back_to_embedded() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        let (config, source) = load_config(Some(&missing)).unwrap();
        assert_eq!(source, ConfigSource::Embedded);
        assert_eq!(config, DashboardConfig::default());
    }
}
