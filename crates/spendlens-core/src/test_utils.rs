//! Test utilities for spendlens-core
//!
//! This module provides a mock dashboard API server that serves canned
//! responses for development and integration tests.

use std::net::SocketAddr;

use axum::{
    extract::{Json, Query},
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::sync::oneshot;

/// Mock dashboard API server for testing and development
pub struct MockDashboardServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDashboardServer {
    /// Start the mock server on an available port
    pub async fn start() -> Self {
        let app = Router::new()
            .route("/predict_expenses", get(handle_predictions))
            .route("/expense_stats", get(handle_stats))
            .route("/get_budgets", get(handle_budgets))
            .route("/get_expenses", get(handle_expenses));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .unwrap();
        });

        Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    /// Get the base URL for this mock server
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Stop the mock server
    pub fn stop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDashboardServer {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Six months of rising spending followed by a three month forecast
pub fn sample_forecast() -> Value {
    json!({
        "historical": [
            {"month": "2024-01", "amount": 0},
            {"month": "2024-02", "amount": 800.0},
            {"month": "2024-03", "amount": 900.0},
            {"month": "2024-04", "amount": 1000.0},
            {"month": "2024-05", "amount": 1100.0},
            {"month": "2024-06", "amount": 1300.0}
        ],
        "predictions": [
            {"month": "Jul 2024", "amount": 1350.0},
            {"month": "Aug 2024", "amount": 1450.0},
            {"month": "Sep 2024", "amount": 1550.0}
        ]
    })
}

async fn handle_predictions() -> Json<Value> {
    Json(sample_forecast())
}

#[derive(Debug, Deserialize)]
struct StatsQuery {
    timeframe: Option<String>,
}

async fn handle_stats(Query(query): Query<StatsQuery>) -> Json<Value> {
    let body = match query.timeframe.as_deref().unwrap_or("month") {
        "week" => json!({
            "total": 320.0,
            "by_category": {"Food": 220.0, "Transport": 100.0},
            "monthly_trend": monthly_trend()
        }),
        "year" => json!({
            "total": 5100.0,
            "by_category": {"Food": 2600.0, "Rent": 2000.0, "Transport": 500.0},
            "monthly_trend": monthly_trend()
        }),
        _ => json!({
            "total": 1300.0,
            "by_category": {"Food": 650.0, "Rent": 500.0, "Transport": 150.0},
            "monthly_trend": monthly_trend()
        }),
    };
    Json(body)
}

fn monthly_trend() -> Value {
    json!([
        {"month": "Jan 2024", "amount": 0},
        {"month": "Feb 2024", "amount": 800.0},
        {"month": "Mar 2024", "amount": 900.0},
        {"month": "Apr 2024", "amount": 1000.0},
        {"month": "May 2024", "amount": 1100.0},
        {"month": "Jun 2024", "amount": 1300.0}
    ])
}

async fn handle_budgets() -> Json<Value> {
    Json(json!([
        {"category": "Food", "budget": 600.0, "spent": 650.0, "remaining": -50.0},
        {"category": "Transport", "budget": 300.0, "spent": 150.0, "remaining": 150.0}
    ]))
}

#[derive(Debug, Deserialize)]
struct ExpensesQuery {
    category: Option<String>,
}

async fn handle_expenses(Query(query): Query<ExpensesQuery>) -> Json<Value> {
    let all = vec![
        json!({"id": 3, "amount": 450.0, "category": "Food", "description": "Groceries",
               "date": "2024-06-20 18:02:11", "receipt": "groceries_20240620_180211.jpg"}),
        json!({"id": 2, "amount": 150.0, "category": "Transport", "description": null,
               "date": "2024-06-12 08:15:00", "receipt": null}),
        json!({"id": 1, "amount": 200.0, "category": "Food", "description": "Dinner out",
               "date": "2024-06-03 21:40:37", "receipt": null}),
    ];

    let filtered: Vec<Value> = match query.category.as_deref() {
        Some(category) if !category.is_empty() => all
            .into_iter()
            .filter(|e| e["category"] == category)
            .collect(),
        _ => all,
    };

    Json(Value::Array(filtered))
}
