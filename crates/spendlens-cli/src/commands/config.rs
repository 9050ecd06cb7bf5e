//! Configuration display command

use anyhow::Result;
use spendlens_core::{ConfigSource, DashboardConfig};

pub fn cmd_config(config: &DashboardConfig, source: &ConfigSource, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(config)?);
        return Ok(());
    }

    println!();
    println!("⚙️  Configuration ({})", source);
    println!("   ─────────────────────────────────────────────");
    println!("   API URL:              {}", config.api.base_url);
    println!("   API Timeout:          {}s", config.api.timeout.as_secs());
    println!("   Trend Window:         {} months", config.insights.trend_window);
    println!(
        "   Trend Threshold:      ±{:.1}%",
        config.insights.trend_threshold_pct
    );
    println!(
        "   Forecast Threshold:   ±{:.1}%",
        config.insights.forecast_threshold_pct
    );
    println!(
        "   Near-Budget Limit:    {:.0}%",
        config.budgets.near_limit_pct
    );
    println!("   Currency:             {}", config.display.currency_symbol);
    println!("   Weeks per Month:      {}", config.display.weeks_per_month);
    println!();

    Ok(())
}
