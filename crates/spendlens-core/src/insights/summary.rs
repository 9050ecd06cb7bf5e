//! Prediction summary shown next to the forecast chart

use serde::{Deserialize, Serialize};

use crate::models::ForecastPayload;

use super::forecast::{historical_average, ForecastComparator};

/// Next month's forecast relative to the historical average
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForecastDirection {
    Higher,
    Lower,
    Similar,
}

impl ForecastDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            ForecastDirection::Higher => "↑ Higher than average",
            ForecastDirection::Lower => "↓ Lower than average",
            ForecastDirection::Similar => "→ Similar to average",
        }
    }
}

impl ForecastDirection {
    /// Place `next` against `average` scaled by ±`threshold_pct`
    ///
    /// Unlike the forecast insight this needs no ratio, so any spending
    /// forecast over a zero average reads as higher.
    pub fn classify(next: f64, average: f64, threshold_pct: f64) -> Self {
        let margin = threshold_pct / 100.0;
        if next > average * (1.0 + margin) {
            ForecastDirection::Higher
        } else if next < average * (1.0 - margin) {
            ForecastDirection::Lower
        } else {
            ForecastDirection::Similar
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionSummary {
    pub next_month: f64,
    /// All predicted amounts in order (the multi-month outlook)
    pub outlook: Vec<f64>,
    /// Mean of every historical month, zero months included
    pub historical_average: f64,
    pub direction: ForecastDirection,
}

impl PredictionSummary {
    /// Summarize a payload; `None` when there are no predictions
    pub fn from_payload(payload: &ForecastPayload, comparator: &ForecastComparator) -> Option<Self> {
        let next_month = payload.predictions.first()?.amount;
        let average = historical_average(&payload.historical);

        Some(Self {
            next_month,
            outlook: payload.predictions.iter().map(|p| p.amount).collect(),
            historical_average: average,
            direction: ForecastDirection::classify(
                next_month,
                average,
                comparator.threshold_pct(),
            ),
        })
    }
}
