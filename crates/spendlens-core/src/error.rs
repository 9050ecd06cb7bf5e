//! Error types for SpendLens

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API error: {endpoint} returned {status}")]
    Api { endpoint: String, status: u16 },

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Recoverable conditions raised while deriving insights.
///
/// Neither variant is fatal: the composer turns `InsufficientData` into an
/// advisory insight and the forecast comparator resolves `UndefinedRatio`
/// to the "near average" band.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Insufficient data: {qualifying} qualifying points, need {required}")]
    InsufficientData { qualifying: usize, required: usize },

    #[error("Undefined ratio: zero or non-finite denominator")]
    UndefinedRatio,
}

/// Percent change from `base` to `value`.
///
/// Fails with `UndefinedRatio` when `base` is zero or the result is not finite.
pub fn percent_change(base: f64, value: f64) -> std::result::Result<f64, AnalysisError> {
    if base == 0.0 {
        return Err(AnalysisError::UndefinedRatio);
    }
    let pct = (value - base) / base * 100.0;
    if pct.is_finite() {
        Ok(pct)
    } else {
        Err(AnalysisError::UndefinedRatio)
    }
}
