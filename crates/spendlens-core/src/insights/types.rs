//! Core types for the insight pipeline

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What an insight talks about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightCategory {
    /// Direction of recent spending (or the "collect more data" advisory)
    Trend,
    /// Next month's forecast relative to the historical average
    Forecast,
    /// Calendar-driven seasonal advisory
    Seasonal,
}

impl InsightCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightCategory::Trend => "trend",
            InsightCategory::Forecast => "forecast",
            InsightCategory::Seasonal => "seasonal",
        }
    }
}

impl fmt::Display for InsightCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InsightCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "trend" => Ok(InsightCategory::Trend),
            "forecast" => Ok(InsightCategory::Forecast),
            "seasonal" => Ok(InsightCategory::Seasonal),
            _ => Err(format!("Unknown insight category: {}", s)),
        }
    }
}

/// Severity level of an insight
///
/// Dashboard insights are advisory only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A rendered, human-readable insight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub category: InsightCategory,
    pub severity: Severity,
    /// Short headline (e.g., "Spending is increasing rapidly")
    pub title: String,
    /// Full message including the headline
    pub text: String,
}

impl Insight {
    pub fn info(category: InsightCategory, title: impl Into<String>, body: &str) -> Self {
        let title = title.into();
        let text = if body.is_empty() {
            title.clone()
        } else {
            format!("{} {}", title, body)
        };
        Self {
            category,
            severity: Severity::Info,
            title,
            text,
        }
    }
}

/// Direction of spending over the trend window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendBand {
    Increasing,
    Decreasing,
    Stable,
}

impl TrendBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendBand::Increasing => "increasing",
            TrendBand::Decreasing => "decreasing",
            TrendBand::Stable => "stable",
        }
    }
}

impl fmt::Display for TrendBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of trend analysis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    /// Percent change from the first to the last point of the window
    pub percentage: f64,
    pub band: TrendBand,
    /// Number of months the change was measured over
    pub window: usize,
}

/// Where next month's forecast sits relative to the historical average
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForecastBand {
    Above,
    Below,
    Near,
}

impl ForecastBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            ForecastBand::Above => "above",
            ForecastBand::Below => "below",
            ForecastBand::Near => "near",
        }
    }
}

impl fmt::Display for ForecastBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of comparing a forecast against the historical average
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastComparison {
    pub percentage: f64,
    pub band: ForecastBand,
}

/// Seasonal spending pattern for the current month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeasonalTag {
    /// Dec, Jan, Feb
    WinterHoliday,
    /// Jul, Aug, Sep
    Summer,
}

impl SeasonalTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeasonalTag::WinterHoliday => "winter_holiday",
            SeasonalTag::Summer => "summer",
        }
    }
}

impl fmt::Display for SeasonalTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
