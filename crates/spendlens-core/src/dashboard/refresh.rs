//! Dashboard refresh orchestration
//!
//! Issues the independent dashboard fetches together and turns the
//! responses into one snapshot. A failing endpoint only blanks its own
//! section.

use chrono::NaiveDate;
use serde::Serialize;

use crate::client::DashboardApi;
use crate::config::DashboardConfig;
use crate::error::Result;
use crate::insights::{InsightEngine, PredictiveReport};
use crate::models::{Expense, ExpenseFilter, Timeframe};

use super::budget::BudgetProgress;
use super::stats::StatsSummary;

/// What to load in one refresh
#[derive(Debug, Clone)]
pub struct RefreshRequest {
    pub stats_timeframe: Timeframe,
    pub expense_filter: ExpenseFilter,
    /// Date the dashboard is rendered for (drives seasonal advice)
    pub today: NaiveDate,
}

impl RefreshRequest {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            stats_timeframe: Timeframe::Month,
            expense_filter: ExpenseFilter::default(),
            today,
        }
    }
}

/// Freshly computed dashboard state; `None` marks a section that failed to load
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub stats: Option<StatsSummary>,
    pub budgets: Option<Vec<BudgetProgress>>,
    pub expenses: Option<Vec<Expense>>,
    pub predictive: Option<PredictiveReport>,
}

impl DashboardSnapshot {
    /// Number of sections that failed to load
    pub fn failed_sections(&self) -> usize {
        [
            self.stats.is_none(),
            self.budgets.is_none(),
            self.expenses.is_none(),
            self.predictive.is_none(),
        ]
        .iter()
        .filter(|&&failed| failed)
        .count()
    }
}

/// Loads every dashboard section from a `DashboardApi`
pub struct DashboardRefresher<'a> {
    api: &'a dyn DashboardApi,
    engine: InsightEngine,
    near_limit_pct: f64,
    weeks_per_month: f64,
}

impl<'a> DashboardRefresher<'a> {
    pub fn new(api: &'a dyn DashboardApi, config: &DashboardConfig) -> Self {
        Self {
            api,
            engine: InsightEngine::from_settings(&config.insights),
            near_limit_pct: config.budgets.near_limit_pct,
            weeks_per_month: config.display.weeks_per_month,
        }
    }

    /// Fetch all sections concurrently and build a snapshot
    pub async fn refresh(&self, request: &RefreshRequest) -> DashboardSnapshot {
        let (stats, budgets, expenses, predictions) = tokio::join!(
            self.api.fetch_stats(request.stats_timeframe),
            self.api.fetch_budgets(),
            self.api.fetch_expenses(&request.expense_filter),
            self.api.fetch_predictions(),
        );

        let stats = section("stats", stats).map(|stats| {
            StatsSummary::from_stats(&stats, request.stats_timeframe, self.weeks_per_month)
        });

        let budgets = section("budgets", budgets).map(|budgets| {
            budgets
                .iter()
                .map(|b| BudgetProgress::from_budget(b, self.near_limit_pct))
                .collect::<Vec<_>>()
        });

        let expenses = section("expenses", expenses);

        let predictive = section("predictions", predictions)
            .map(|payload| self.engine.analyze(&payload, request.today));

        let snapshot = DashboardSnapshot {
            stats,
            budgets,
            expenses,
            predictive,
        };

        tracing::info!(
            failed = snapshot.failed_sections(),
            "Dashboard refresh complete"
        );

        snapshot
    }
}

fn section<T>(name: &'static str, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(section = name, error = %e, "Dashboard section failed to load");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::HttpDashboardClient;
    use crate::dashboard::BudgetStatus;
    use crate::error::Error;
    use crate::insights::TrendBand;
    use crate::models::{CategoryBudget, ExpenseStats, ForecastPayload, TimePoint};
    use crate::test_utils::MockDashboardServer;
    use async_trait::async_trait;

    /// Source where only predictions are available
    struct PredictionsOnly;

    #[async_trait]
    impl DashboardApi for PredictionsOnly {
        async fn fetch_predictions(&self) -> Result<ForecastPayload> {
            Ok(ForecastPayload {
                historical: vec![
                    TimePoint::new("2024-01", 100.0),
                    TimePoint::new("2024-02", 100.0),
                    TimePoint::new("2024-03", 70.0),
                ],
                predictions: vec![TimePoint::new("Apr 2024", 60.0)],
            })
        }

        async fn fetch_stats(&self, _timeframe: Timeframe) -> Result<ExpenseStats> {
            Err(Error::Api {
                endpoint: "/expense_stats".to_string(),
                status: 500,
            })
        }

        async fn fetch_budgets(&self) -> Result<Vec<CategoryBudget>> {
            Err(Error::Config("budgets disabled".to_string()))
        }

        async fn fetch_expenses(&self, _filter: &ExpenseFilter) -> Result<Vec<Expense>> {
            Err(Error::Api {
                endpoint: "/get_expenses".to_string(),
                status: 503,
            })
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 15).unwrap()
    }

    #[tokio::test]
    async fn test_refresh_from_mock_server() {
        let server = MockDashboardServer::start().await;
        let client = HttpDashboardClient::new(&server.url()).unwrap();
        let config = DashboardConfig::default();

        let refresher = DashboardRefresher::new(&client, &config);
        let snapshot = refresher.refresh(&RefreshRequest::new(today())).await;

        assert_eq!(snapshot.failed_sections(), 0);

        let stats = snapshot.stats.unwrap();
        assert_eq!(stats.total, 1300.0);
        assert_eq!(stats.top_category.unwrap().name, "Food");

        let budgets = snapshot.budgets.unwrap();
        assert_eq!(budgets[0].status, BudgetStatus::OverBudget);
        assert_eq!(budgets[1].status, BudgetStatus::UnderBudget);

        assert_eq!(snapshot.expenses.unwrap().len(), 3);

        let predictive = snapshot.predictive.unwrap();
        assert_eq!(predictive.chart.len(), 9);
        // Qualifying window 1000 -> 1100 -> 1300 is +30%
        assert_eq!(predictive.trend.unwrap().band, TrendBand::Increasing);
        assert_eq!(predictive.insights.len(), 3);
    }

    #[tokio::test]
    async fn test_failed_sections_are_isolated() {
        let api = PredictionsOnly;
        let config = DashboardConfig::default();

        let snapshot = DashboardRefresher::new(&api, &config)
            .refresh(&RefreshRequest::new(today()))
            .await;

        assert_eq!(snapshot.failed_sections(), 3);
        assert!(snapshot.stats.is_none());
        let predictive = snapshot.predictive.unwrap();
        assert_eq!(predictive.trend.unwrap().band, TrendBand::Decreasing);
    }
}
