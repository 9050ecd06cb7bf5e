//! Live dashboard command

use anyhow::{Context, Result};
use chrono::NaiveDate;
use spendlens_core::dashboard::{BudgetStatus, StatsSummary};
use spendlens_core::models::Expense;
use spendlens_core::{
    BudgetProgress, DashboardConfig, DashboardRefresher, DashboardSnapshot, ExpenseFilter,
    HttpDashboardClient, RefreshRequest, Timeframe,
};

use super::{money, print_predictive_report, truncate};

pub async fn cmd_dashboard(
    config: &DashboardConfig,
    url: Option<&str>,
    timeframe: Timeframe,
    category: Option<String>,
    today: NaiveDate,
    limit: usize,
    json: bool,
) -> Result<()> {
    let mut api_config = config.api.clone();
    if let Some(url) = url {
        api_config.base_url = url.to_string();
    }

    let client =
        HttpDashboardClient::from_config(&api_config).context("Failed to create API client")?;
    tracing::info!(url = client.base_url(), "Refreshing dashboard");

    let request = RefreshRequest {
        stats_timeframe: timeframe,
        expense_filter: ExpenseFilter {
            timeframe,
            category: category.filter(|c| !c.is_empty()),
        },
        today,
    };

    let snapshot = DashboardRefresher::new(&client, config)
        .refresh(&request)
        .await;

    if snapshot.failed_sections() == 4 {
        anyhow::bail!(
            "Could not load any dashboard data from {} (is the server running?)",
            client.base_url()
        );
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print_snapshot(&snapshot, &config.display.currency_symbol, limit);
    }

    Ok(())
}

pub fn print_snapshot(snapshot: &DashboardSnapshot, currency: &str, limit: usize) {
    println!();
    println!("╭─────────────────────────────────────────╮");
    println!("│         💰 SpendLens Dashboard          │");
    println!("╰─────────────────────────────────────────╯");

    match &snapshot.stats {
        Some(stats) => print_stats(stats, currency),
        None => println!("\n  ⚠️  Stats unavailable"),
    }

    match &snapshot.budgets {
        Some(budgets) => print_budgets(budgets, currency),
        None => println!("\n  ⚠️  Budgets unavailable"),
    }

    match &snapshot.expenses {
        Some(expenses) => print_expenses(expenses, currency, limit),
        None => println!("\n  ⚠️  Expenses unavailable"),
    }

    match &snapshot.predictive {
        Some(report) => print_predictive_report(report, currency),
        None => println!("\n  ⚠️  Predictions unavailable\n"),
    }
}

fn print_stats(stats: &StatsSummary, currency: &str) {
    println!();
    println!("  Total ({}):      {}", stats.timeframe, money(currency, stats.total));
    match &stats.top_category {
        Some(top) => println!(
            "  Top Category:      {} ({})",
            top.name,
            money(currency, top.amount)
        ),
        None => println!("  Top Category:      --"),
    }
    println!(
        "  Weekly Average:    {}",
        money(currency, stats.weekly_average)
    );

    if !stats.trend_chart.labels.is_empty() {
        println!();
        println!("  📈 Monthly Trend");
        let max = stats
            .trend_chart
            .values
            .iter()
            .cloned()
            .fold(0.0_f64, f64::max);
        for (label, value) in stats.trend_chart.labels.iter().zip(&stats.trend_chart.values) {
            let width = if max > 0.0 {
                (value / max * 30.0).round() as usize
            } else {
                0
            };
            println!(
                "     {:9} {:30} {}",
                label,
                "█".repeat(width),
                money(currency, *value)
            );
        }
    }
}

fn print_budgets(budgets: &[BudgetProgress], currency: &str) {
    println!();
    println!("  🎯 Budgets");
    if budgets.is_empty() {
        println!("     No budgets set for this month");
        return;
    }

    for budget in budgets {
        let filled = (budget.progress / 10.0).round() as usize;
        let icon = match budget.status {
            BudgetStatus::UnderBudget => "🟢",
            BudgetStatus::NearBudget => "🟡",
            BudgetStatus::OverBudget => "🔴",
        };
        println!(
            "     {} {:15} [{:10}] {} / {}  {}",
            icon,
            truncate(&budget.category, 15),
            "#".repeat(filled.min(10)),
            money(currency, budget.spent),
            money(currency, budget.budget),
            budget.remaining_label(currency)
        );
    }
}

fn print_expenses(expenses: &[Expense], currency: &str, limit: usize) {
    println!();
    println!("  🧾 Recent Expenses");
    if expenses.is_empty() {
        println!("     No expenses found");
        return;
    }

    for expense in expenses.iter().take(limit) {
        println!(
            "     {:11} │ {:>10} │ {:12} │ {}{}",
            expense.display_date(),
            money(currency, expense.amount),
            truncate(&expense.category, 12),
            truncate(expense.description.as_deref().unwrap_or("-"), 30),
            if expense.receipt.is_some() { " 📎" } else { "" }
        );
    }
    if expenses.len() > limit {
        println!("     ... and {} more", expenses.len() - limit);
    }
}
