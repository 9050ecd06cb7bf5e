//! Dashboard API client
//!
//! HTTP client for the expense tracker's JSON endpoints. The `DashboardApi`
//! trait is the seam the refresher works against, so tests and offline
//! tooling can supply data without a server.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::models::{CategoryBudget, Expense, ExpenseFilter, ExpenseStats, ForecastPayload, Timeframe};

/// Source of dashboard data
#[async_trait]
pub trait DashboardApi: Send + Sync {
    /// `GET /predict_expenses`
    async fn fetch_predictions(&self) -> Result<ForecastPayload>;

    /// `GET /expense_stats?timeframe=...`
    async fn fetch_stats(&self, timeframe: Timeframe) -> Result<ExpenseStats>;

    /// `GET /get_budgets`
    async fn fetch_budgets(&self) -> Result<Vec<CategoryBudget>>;

    /// `GET /get_expenses?timeframe=...&category=...`
    async fn fetch_expenses(&self, filter: &ExpenseFilter) -> Result<Vec<Expense>>;
}

/// reqwest-backed `DashboardApi`
#[derive(Clone)]
pub struct HttpDashboardClient {
    http_client: Client,
    base_url: String,
}

impl HttpDashboardClient {
    /// Create a client with the default timeout
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, ApiConfig::default().timeout)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        Self::with_timeout(&config.base_url, config.timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, ?query, "Fetching dashboard endpoint");

        let response = self.http_client.get(&url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Api {
                endpoint: path.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl DashboardApi for HttpDashboardClient {
    async fn fetch_predictions(&self) -> Result<ForecastPayload> {
        self.get_json("/predict_expenses", &[]).await
    }

    async fn fetch_stats(&self, timeframe: Timeframe) -> Result<ExpenseStats> {
        self.get_json("/expense_stats", &[("timeframe", timeframe.as_str())])
            .await
    }

    async fn fetch_budgets(&self) -> Result<Vec<CategoryBudget>> {
        self.get_json("/get_budgets", &[]).await
    }

    async fn fetch_expenses(&self, filter: &ExpenseFilter) -> Result<Vec<Expense>> {
        let category = filter.category.as_deref().unwrap_or("");
        self.get_json(
            "/get_expenses",
            &[
                ("timeframe", filter.timeframe.as_str()),
                ("category", category),
            ],
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockDashboardServer;

    #[test]
    fn test_base_url_trailing_slash() {
        let client = HttpDashboardClient::new("http://localhost:5000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000");
    }

    #[tokio::test]
    async fn test_fetch_predictions() {
        let server = MockDashboardServer::start().await;
        let client = HttpDashboardClient::new(&server.url()).unwrap();

        let payload = client.fetch_predictions().await.unwrap();
        assert_eq!(payload.historical.len(), 6);
        assert_eq!(payload.predictions.len(), 3);
        assert_eq!(payload.historical[0].period, "2024-01");
    }

    #[tokio::test]
    async fn test_fetch_stats_passes_timeframe() {
        let server = MockDashboardServer::start().await;
        let client = HttpDashboardClient::new(&server.url()).unwrap();

        let week = client.fetch_stats(Timeframe::Week).await.unwrap();
        let month = client.fetch_stats(Timeframe::Month).await.unwrap();
        assert!(week.total < month.total);
    }

    #[tokio::test]
    async fn test_fetch_budgets_and_expenses() {
        let server = MockDashboardServer::start().await;
        let client = HttpDashboardClient::new(&server.url()).unwrap();

        let budgets = client.fetch_budgets().await.unwrap();
        assert_eq!(budgets.len(), 2);

        let all = client.fetch_expenses(&ExpenseFilter::default()).await.unwrap();
        let food = client
            .fetch_expenses(&ExpenseFilter {
                timeframe: Timeframe::All,
                category: Some("Food".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(all.len(), 3);
        assert!(food.iter().all(|e| e.category == "Food"));
        assert!(food.len() < all.len());
    }

    #[tokio::test]
    async fn test_error_status() {
        let server = MockDashboardServer::start().await;
        let client = HttpDashboardClient::new(&format!("{}/missing", server.url())).unwrap();

        let err = client.fetch_budgets().await.unwrap_err();
        match err {
            Error::Api { endpoint, status } => {
                assert_eq!(endpoint, "/get_budgets");
                assert_eq!(status, 404);
            }
            other => panic!("unexpected error: {}", other),
        }
    }
}
