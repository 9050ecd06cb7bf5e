//! Data models for SpendLens
//!
//! These mirror the JSON payloads served by the dashboard API. Field names
//! follow the wire format (`month`, `by_category`, ...) via serde renames.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ========== Time Series ==========

/// A single period and its spending total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimePoint {
    /// Period label, `YYYY-MM` for historical data or a display label
    /// ("Apr 2024") for predictions
    #[serde(rename = "month")]
    pub period: String,
    pub amount: f64,
}

impl TimePoint {
    pub fn new(period: impl Into<String>, amount: f64) -> Self {
        Self {
            period: period.into(),
            amount,
        }
    }

    /// Human-readable label ("2024-03" -> "Mar 2024")
    ///
    /// Periods that are not `YYYY-MM` are returned unchanged.
    pub fn display_label(&self) -> String {
        format_period_label(&self.period)
    }
}

/// Reformat a `YYYY-MM` period as `Mon YYYY`, passing anything else through
pub fn format_period_label(period: &str) -> String {
    NaiveDate::parse_from_str(&format!("{}-01", period), "%Y-%m-%d")
        .map(|d| d.format("%b %Y").to_string())
        .unwrap_or_else(|_| period.to_string())
}

/// Chronological monthly totals, zero amounts meaning "no spending"
pub type HistoricalSeries = Vec<TimePoint>;

/// Forecast totals for the periods following the last historical period
pub type PredictionSeries = Vec<TimePoint>;

/// Response of `GET /predict_expenses`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastPayload {
    #[serde(default)]
    pub historical: HistoricalSeries,
    #[serde(default)]
    pub predictions: PredictionSeries,
}

// ========== Stats ==========

/// Reporting window used to scope dashboard queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    All,
    Week,
    #[default]
    Month,
    Year,
}

impl Timeframe {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            _ => Err(format!(
                "Unknown timeframe: {} (valid: all, week, month, year)",
                s
            )),
        }
    }
}

/// Response of `GET /expense_stats`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpenseStats {
    pub total: f64,
    /// Spending per category, ordered by category name
    #[serde(default)]
    pub by_category: BTreeMap<String, f64>,
    /// Last six months, labels already formatted ("Mar 2024")
    #[serde(default)]
    pub monthly_trend: Vec<TimePoint>,
}

// ========== Budgets ==========

/// One row of `GET /get_budgets`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBudget {
    pub category: String,
    pub budget: f64,
    pub spent: f64,
    pub remaining: f64,
}

// ========== Expenses ==========

/// One row of `GET /get_expenses`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub amount: f64,
    pub category: String,
    pub description: Option<String>,
    /// Timestamp as stored by the server (`YYYY-MM-DD HH:MM:SS`)
    pub date: String,
    /// Receipt filename, if one was uploaded
    pub receipt: Option<String>,
}

impl Expense {
    /// Date formatted for display ("05 Mar 2024"), raw string if unparseable
    pub fn display_date(&self) -> String {
        let date_part = self.date.split_whitespace().next().unwrap_or("");
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
            .map(|d| d.format("%d %b %Y").to_string())
            .unwrap_or_else(|_| self.date.clone())
    }
}

/// Query parameters for the expense listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseFilter {
    pub timeframe: Timeframe,
    /// Restrict to one category (None = all categories)
    pub category: Option<String>,
}

impl Default for ExpenseFilter {
    fn default() -> Self {
        Self {
            timeframe: Timeframe::All,
            category: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_period_label() {
        assert_eq!(format_period_label("2024-03"), "Mar 2024");
        assert_eq!(format_period_label("2023-12"), "Dec 2023");
        // Prediction labels are already display labels
        assert_eq!(format_period_label("Apr 2024"), "Apr 2024");
        assert_eq!(format_period_label(""), "");
    }

    #[test]
    fn test_forecast_payload_wire_format() {
        let json = r#"{
            "historical": [{"month": "2024-01", "amount": 120}, {"month": "2024-02", "amount": 0}],
            "predictions": [{"month": "Mar 2024", "amount": 130.5}]
        }"#;
        let payload: ForecastPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.historical.len(), 2);
        assert_eq!(payload.historical[0].period, "2024-01");
        assert_eq!(payload.historical[0].amount, 120.0);
        assert_eq!(payload.predictions[0].period, "Mar 2024");

        let out = serde_json::to_value(&payload.historical[0]).unwrap();
        assert_eq!(out["month"], "2024-01");
    }

    #[test]
    fn test_timeframe_parse() {
        assert_eq!("month".parse::<Timeframe>().unwrap(), Timeframe::Month);
        assert_eq!("WEEK".parse::<Timeframe>().unwrap(), Timeframe::Week);
        assert!("quarter".parse::<Timeframe>().is_err());
        assert_eq!(Timeframe::Year.to_string(), "year");
        assert_eq!(Timeframe::default(), Timeframe::Month);
    }

    #[test]
    fn test_expense_display_date() {
        let expense = Expense {
            id: 1,
            amount: 42.0,
            category: "Food".to_string(),
            description: None,
            date: "2024-03-05 14:22:10".to_string(),
            receipt: None,
        };
        assert_eq!(expense.display_date(), "05 Mar 2024");
    }

    #[test]
    fn test_stats_deserialize_integer_totals() {
        let json = r#"{"total": 0, "by_category": {}, "monthly_trend": []}"#;
        let stats: ExpenseStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total, 0.0);
        assert!(stats.by_category.is_empty());
    }
}
