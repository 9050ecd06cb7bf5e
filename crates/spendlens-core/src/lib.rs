//! SpendLens Core Library
//!
//! Client-side logic for the expense tracker dashboard:
//! - Data models for the dashboard API payloads
//! - Predictive insights (trend, forecast comparison, seasonality)
//! - Chart-data reshaping for historical + predicted series
//! - Budget progress and summary cards
//! - HTTP client and concurrent dashboard refresh
//! - Layered TOML configuration

pub mod client;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod insights;
pub mod models;

/// Test utilities including mock dashboard API server
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use client::{DashboardApi, HttpDashboardClient};
pub use config::{ConfigSource, DashboardConfig};
pub use dashboard::{
    BudgetProgress, BudgetStatus, DashboardRefresher, DashboardSnapshot, RefreshRequest,
    StatsSummary,
};
pub use error::{AnalysisError, Error, Result};
pub use insights::{Insight, InsightEngine, MergedSeries, PredictiveReport};
pub use models::{ExpenseFilter, ForecastPayload, Timeframe, TimePoint};
