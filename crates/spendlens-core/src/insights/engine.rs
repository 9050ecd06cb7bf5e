//! Insight Engine - runs the analyzers over one forecast payload

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::InsightSettings;
use crate::models::ForecastPayload;

use super::composer::compose;
use super::forecast::{historical_average, ForecastComparator};
use super::seasonality::seasonal_hint_for;
use super::series::{merge, MergedSeries};
use super::summary::PredictionSummary;
use super::trend::TrendAnalyzer;
use super::types::{ForecastComparison, Insight, SeasonalTag, Trend};

/// Everything the predictive section of the dashboard renders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictiveReport {
    /// Historical + predicted series on one axis
    pub chart: MergedSeries,
    pub summary: Option<PredictionSummary>,
    /// `None` when there was not enough history
    pub trend: Option<Trend>,
    pub comparison: Option<ForecastComparison>,
    pub seasonal: Option<SeasonalTag>,
    /// Ordered insights: trend, forecast, seasonal
    pub insights: Vec<Insight>,
}

/// Runs trend, forecast and seasonal analysis and composes the results
#[derive(Debug, Clone, Default)]
pub struct InsightEngine {
    trend: TrendAnalyzer,
    comparator: ForecastComparator,
}

impl InsightEngine {
    /// Engine with the default thresholds
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_settings(settings: &InsightSettings) -> Self {
        Self {
            trend: settings.trend_analyzer(),
            comparator: settings.forecast_comparator(),
        }
    }

    /// Analyze a payload as of `today`
    ///
    /// `today` only selects the seasonal advisory; nothing reads the clock.
    pub fn analyze(&self, payload: &ForecastPayload, today: NaiveDate) -> PredictiveReport {
        let chart = merge(&payload.historical, &payload.predictions);
        let summary = PredictionSummary::from_payload(payload, &self.comparator);

        let trend = self.trend.analyze(&payload.historical);
        let comparison = payload.predictions.first().map(|next| {
            self.comparator
                .compare(next.amount, historical_average(&payload.historical))
        });
        let seasonal = seasonal_hint_for(today);

        match &trend {
            Ok(t) => tracing::debug!(
                percentage = t.percentage,
                band = t.band.as_str(),
                "Trend analysis complete"
            ),
            Err(e) => tracing::debug!(error = %e, "Trend analysis skipped"),
        }

        let insights = compose(&trend, comparison.as_ref(), seasonal);

        tracing::debug!(
            points = chart.len(),
            insights = insights.len(),
            "Predictive report ready"
        );

        PredictiveReport {
            chart,
            summary,
            trend: trend.ok(),
            comparison,
            seasonal,
            insights,
        }
    }
}
