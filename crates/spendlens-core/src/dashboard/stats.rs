//! Summary cards and chart data derived from `/expense_stats`

use serde::{Deserialize, Serialize};

use crate::models::{ExpenseStats, Timeframe};

/// Labels and values for a single-dataset chart
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartData {
    /// Category breakdown for the doughnut chart, in category name order
    pub fn by_category(stats: &ExpenseStats) -> Self {
        let (labels, values) = stats
            .by_category
            .iter()
            .map(|(name, amount)| (name.clone(), *amount))
            .unzip();
        Self { labels, values }
    }

    /// Monthly totals for the trend line chart
    pub fn monthly_trend(stats: &ExpenseStats) -> Self {
        let (labels, values) = stats
            .monthly_trend
            .iter()
            .map(|p| (p.period.clone(), p.amount))
            .unzip();
        Self { labels, values }
    }
}

/// Category with the largest spend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopCategory {
    pub name: String,
    pub amount: f64,
}

/// Dashboard summary cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub timeframe: Timeframe,
    pub total: f64,
    /// `None` when no category has positive spending
    pub top_category: Option<TopCategory>,
    pub weekly_average: f64,
    pub category_chart: ChartData,
    pub trend_chart: ChartData,
}

impl StatsSummary {
    pub fn from_stats(stats: &ExpenseStats, timeframe: Timeframe, weeks_per_month: f64) -> Self {
        // Strictly greater, so the first category in name order wins ties
        let top_category = stats
            .by_category
            .iter()
            .fold(None::<TopCategory>, |best, (name, &amount)| {
                let current_best = best.as_ref().map(|b| b.amount).unwrap_or(0.0);
                if amount > current_best {
                    Some(TopCategory {
                        name: name.clone(),
                        amount,
                    })
                } else {
                    best
                }
            });

        let weekly_average = match timeframe {
            Timeframe::Month if weeks_per_month > 0.0 => stats.total / weeks_per_month,
            _ => stats.total,
        };

        Self {
            timeframe,
            total: stats.total,
            top_category,
            weekly_average,
            category_chart: ChartData::by_category(stats),
            trend_chart: ChartData::monthly_trend(stats),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimePoint;
    use std::collections::BTreeMap;

    fn sample_stats() -> ExpenseStats {
        let mut by_category = BTreeMap::new();
        by_category.insert("Transport".to_string(), 300.0);
        by_category.insert("Food".to_string(), 433.0);
        by_category.insert("Rent".to_string(), 433.0);
        ExpenseStats {
            total: 1166.0,
            by_category,
            monthly_trend: vec![
                TimePoint::new("Feb 2024", 900.0),
                TimePoint::new("Mar 2024", 1166.0),
            ],
        }
    }

    #[test]
    fn test_top_category_first_wins_ties() {
        let summary = StatsSummary::from_stats(&sample_stats(), Timeframe::Month, 4.33);
        let top = summary.top_category.unwrap();
        assert_eq!(top.name, "Food");
        assert_eq!(top.amount, 433.0);
    }

    #[test]
    fn test_weekly_average_only_divides_months() {
        let monthly = StatsSummary::from_stats(&sample_stats(), Timeframe::Month, 4.33);
        assert!((monthly.weekly_average - 1166.0 / 4.33).abs() < 1e-9);

        let weekly = StatsSummary::from_stats(&sample_stats(), Timeframe::Week, 4.33);
        assert_eq!(weekly.weekly_average, 1166.0);
    }

    #[test]
    fn test_empty_stats() {
        let summary = StatsSummary::from_stats(&ExpenseStats::default(), Timeframe::Year, 4.33);
        assert!(summary.top_category.is_none());
        assert_eq!(summary.total, 0.0);
        assert!(summary.category_chart.labels.is_empty());
    }

    #[test]
    fn test_chart_data() {
        let stats = sample_stats();
        let categories = ChartData::by_category(&stats);
        assert_eq!(categories.labels, vec!["Food", "Rent", "Transport"]);
        assert_eq!(categories.values, vec![433.0, 433.0, 300.0]);

        let trend = ChartData::monthly_trend(&stats);
        assert_eq!(trend.labels, vec!["Feb 2024", "Mar 2024"]);
        assert_eq!(trend.values, vec![900.0, 1166.0]);
    }
}
