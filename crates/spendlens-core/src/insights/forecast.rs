//! Forecast Comparator
//!
//! Places next month's forecast relative to the historical average. The
//! average covers every historical month, zero months included, unlike the
//! trend window which only looks at positive months.

use crate::error::percent_change;
use crate::models::TimePoint;

use super::types::{ForecastBand, ForecastComparison};

/// Classifies a forecast as above, below, or near the historical average
#[derive(Debug, Clone)]
pub struct ForecastComparator {
    /// |percent difference| beyond which the forecast is not "near" (default 10%)
    threshold_pct: f64,
}

impl ForecastComparator {
    pub fn new() -> Self {
        Self {
            threshold_pct: 10.0,
        }
    }

    pub fn with_threshold(threshold_pct: f64) -> Self {
        Self { threshold_pct }
    }

    pub fn threshold_pct(&self) -> f64 {
        self.threshold_pct
    }

    /// Compare a forecast with an average
    ///
    /// A zero average has no meaningful ratio and is reported as near, 0%.
    pub fn compare(&self, next_prediction: f64, historical_average: f64) -> ForecastComparison {
        let percentage = match percent_change(historical_average, next_prediction) {
            Ok(pct) => pct,
            Err(e) => {
                tracing::debug!(
                    average = historical_average,
                    error = %e,
                    "Forecast comparison has no baseline"
                );
                return ForecastComparison {
                    percentage: 0.0,
                    band: ForecastBand::Near,
                };
            }
        };

        let band = if percentage > self.threshold_pct {
            ForecastBand::Above
        } else if percentage < -self.threshold_pct {
            ForecastBand::Below
        } else {
            ForecastBand::Near
        };

        ForecastComparison { percentage, band }
    }
}

impl Default for ForecastComparator {
    fn default() -> Self {
        Self::new()
    }
}

/// Arithmetic mean of all points (0 for an empty series)
pub fn historical_average(series: &[TimePoint]) -> f64 {
    if series.is_empty() {
        return 0.0;
    }
    series.iter().map(|p| p.amount).sum::<f64>() / series.len() as f64
}
