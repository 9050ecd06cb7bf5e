//! Trend Analyzer
//!
//! Measures how spending moved across the most recent qualifying months.
//! Months with zero spending are skipped before the window is taken, so a
//! gap month does not count as a collapse in spending.

use crate::error::{percent_change, AnalysisError};
use crate::models::TimePoint;

use super::types::{Trend, TrendBand};

/// Computes percent change over a fixed trailing window
#[derive(Debug, Clone)]
pub struct TrendAnalyzer {
    /// Number of qualifying points in the window (default 3)
    window: usize,
    /// |percent change| beyond which the trend is not stable (default 15%)
    threshold_pct: f64,
}

impl TrendAnalyzer {
    pub fn new() -> Self {
        Self {
            window: 3,
            threshold_pct: 15.0,
        }
    }

    pub fn with_thresholds(window: usize, threshold_pct: f64) -> Self {
        Self {
            window: window.max(2),
            threshold_pct,
        }
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// Analyze the trailing window of positive-amount points
    pub fn analyze(&self, series: &[TimePoint]) -> Result<Trend, AnalysisError> {
        let qualifying: Vec<f64> = series
            .iter()
            .map(|p| p.amount)
            .filter(|&a| a > 0.0)
            .collect();

        if qualifying.len() < self.window {
            return Err(AnalysisError::InsufficientData {
                qualifying: qualifying.len(),
                required: self.window,
            });
        }

        let window = &qualifying[qualifying.len() - self.window..];
        let first = window[0];
        let last = window[window.len() - 1];

        let percentage = percent_change(first, last).map_err(|_| AnalysisError::InsufficientData {
            qualifying: qualifying.len(),
            required: self.window,
        })?;

        Ok(Trend {
            percentage,
            band: self.band(percentage),
            window: self.window,
        })
    }

    fn band(&self, percentage: f64) -> TrendBand {
        if percentage > self.threshold_pct {
            TrendBand::Increasing
        } else if percentage < -self.threshold_pct {
            TrendBand::Decreasing
        } else {
            TrendBand::Stable
        }
    }
}

impl Default for TrendAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
