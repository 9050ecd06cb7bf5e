//! Insight Composer
//!
//! Turns trend, forecast and seasonal results into ordered, human-readable
//! insights: trend first, forecast second, seasonal last.

use crate::error::AnalysisError;

use super::types::{
    ForecastBand, ForecastComparison, Insight, InsightCategory, SeasonalTag, Trend, TrendBand,
};

/// Compose the insight list for one analysis run
///
/// When the trend could not be computed, the only insight is an advisory
/// asking for more history; forecast and seasonal results are ignored.
pub fn compose(
    trend: &Result<Trend, AnalysisError>,
    comparison: Option<&ForecastComparison>,
    seasonal: Option<SeasonalTag>,
) -> Vec<Insight> {
    let trend = match trend {
        Ok(trend) => trend,
        Err(e) => return vec![insufficient_data_insight(e)],
    };

    let mut insights = vec![trend_insight(trend)];

    if let Some(cmp) = comparison {
        insights.push(forecast_insight(cmp));
    }

    if let Some(tag) = seasonal {
        insights.push(seasonal_insight(tag));
    }

    insights
}

fn insufficient_data_insight(err: &AnalysisError) -> Insight {
    let required = match err {
        AnalysisError::InsufficientData { required, .. } => *required,
        AnalysisError::UndefinedRatio => 3,
    };
    Insight::info(
        InsightCategory::Trend,
        "Collect more data to generate personalized insights.",
        &format!(
            "We need at least {} months of spending history to provide accurate predictions.",
            required
        ),
    )
}

fn trend_insight(trend: &Trend) -> Insight {
    match trend.band {
        TrendBand::Increasing => Insight::info(
            InsightCategory::Trend,
            "Spending is increasing rapidly",
            &format!(
                "(+{:.1}% over last {} months). Consider reviewing your budgets.",
                trend.percentage.abs(),
                trend.window
            ),
        ),
        TrendBand::Decreasing => Insight::info(
            InsightCategory::Trend,
            "Spending is decreasing significantly",
            &format!(
                "({:.1}% lower over last {} months). Good job on managing expenses!",
                trend.percentage.abs(),
                trend.window
            ),
        ),
        TrendBand::Stable => Insight::info(
            InsightCategory::Trend,
            "Spending is relatively stable.",
            "Your expenses are consistent month-to-month.",
        ),
    }
}

fn forecast_insight(cmp: &ForecastComparison) -> Insight {
    match cmp.band {
        ForecastBand::Above => Insight::info(
            InsightCategory::Forecast,
            "Next month is predicted to be higher than average",
            &format!(
                "(+{:.1}%). Plan accordingly for increased expenses.",
                cmp.percentage
            ),
        ),
        ForecastBand::Below => Insight::info(
            InsightCategory::Forecast,
            "Next month is predicted to be lower than average",
            &format!(
                "({:.1}% less). You might save more than usual.",
                cmp.percentage.abs()
            ),
        ),
        ForecastBand::Near => Insight::info(
            InsightCategory::Forecast,
            "Next month is predicted to be close to your average spending.",
            "",
        ),
    }
}

fn seasonal_insight(tag: SeasonalTag) -> Insight {
    match tag {
        SeasonalTag::WinterHoliday => Insight::info(
            InsightCategory::Seasonal,
            "Seasonal pattern detected:",
            "Holiday season often leads to increased spending on gifts and entertainment.",
        ),
        SeasonalTag::Summer => Insight::info(
            InsightCategory::Seasonal,
            "Seasonal pattern detected:",
            "Summer months often see increased spending on travel and activities.",
        ),
    }
}
