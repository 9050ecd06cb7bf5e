//! Predictive insights for the expense dashboard
//!
//! Turns the forecast payload (historical monthly totals plus server-side
//! predictions) into chart data and short textual insights.
//!
//! ## Components
//!
//! - **Series Merger** - Historical and predicted series on one timeline
//! - **Trend Analyzer** - Percent change across the trailing spending months (3 by default)
//! - **Forecast Comparator** - Next month's forecast vs. historical average
//! - **Seasonality** - Calendar-based seasonal advisories
//! - **Composer** - Ordered, human-readable insight list
//!
//! ## Usage
//!
//! ```rust,ignore
//! use spendlens_core::insights::InsightEngine;
//!
//! let engine = InsightEngine::new();
//! let report = engine.analyze(&payload, chrono::Local::now().date_naive());
//! for insight in &report.insights {
//!     println!("{}", insight.text);
//! }
//! ```

pub mod composer;
pub mod engine;
pub mod forecast;
pub mod seasonality;
pub mod series;
pub mod summary;
pub mod trend;
pub mod types;

pub use composer::compose;
pub use engine::{InsightEngine, PredictiveReport};
pub use forecast::{historical_average, ForecastComparator};
pub use seasonality::{seasonal_hint, seasonal_hint_for};
pub use series::{merge, MergedPoint, MergedSeries};
pub use summary::{ForecastDirection, PredictionSummary};
pub use trend::TrendAnalyzer;
pub use types::{
    ForecastBand, ForecastComparison, Insight, InsightCategory, SeasonalTag, Severity, Trend,
    TrendBand,
};
