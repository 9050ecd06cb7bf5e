//! Predictive insights command

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use spendlens_core::insights::{InsightCategory, PredictiveReport};
use spendlens_core::{DashboardConfig, ForecastPayload, InsightEngine};

use super::money;

pub fn cmd_insights(config: &DashboardConfig, file: &Path, today: NaiveDate, json: bool) -> Result<()> {
    let content = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let payload: ForecastPayload =
        serde_json::from_str(&content).context("Invalid forecast payload")?;

    tracing::debug!(
        historical = payload.historical.len(),
        predictions = payload.predictions.len(),
        "Loaded forecast payload"
    );

    let report = InsightEngine::from_settings(&config.insights).analyze(&payload, today);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_predictive_report(&report, &config.display.currency_symbol);
    }

    Ok(())
}

/// Print the forecast table, summary and insights
pub fn print_predictive_report(report: &PredictiveReport, currency: &str) {
    println!();
    println!("🔮 Spending Forecast");
    println!("   ─────────────────────────────────────────────");

    if report.chart.is_empty() {
        println!("   No spending history available.");
    } else {
        println!("   {:12} │ {:>12} │ {:>12}", "Month", "Actual", "Predicted");
        println!("   ─────────────┼──────────────┼─────────────");
        for point in &report.chart.points {
            let actual = point
                .historical
                .map(|a| money(currency, a))
                .unwrap_or_else(|| "-".to_string());
            let predicted = point
                .predicted
                .map(|a| money(currency, a))
                .unwrap_or_else(|| "-".to_string());
            println!("   {:12} │ {:>12} │ {:>12}", point.label, actual, predicted);
        }
    }

    if let Some(summary) = &report.summary {
        let outlook: Vec<String> = summary.outlook.iter().map(|a| money(currency, *a)).collect();
        println!();
        println!(
            "   Next Month Forecast: {}  {}",
            money(currency, summary.next_month),
            summary.direction.as_str()
        );
        println!("   Outlook:             {}", outlook.join(" → "));
        println!(
            "   Historical Average:  {}",
            money(currency, summary.historical_average)
        );
    }

    println!();
    println!("💡 Insights");
    for insight in &report.insights {
        let icon = match insight.category {
            InsightCategory::Trend => "📊",
            InsightCategory::Forecast => "🔮",
            InsightCategory::Seasonal => "🗓️ ",
        };
        println!("   {} {}", icon, insight.text);
    }
    println!();
}
