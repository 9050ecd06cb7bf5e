//! SpendLens CLI - Expense dashboard insights
//!
//! Usage:
//!   spendlens insights --file forecast.json   Report from a saved payload
//!   spendlens dashboard --timeframe month     Fetch and show the dashboard
//!   spendlens config                          Show effective configuration

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let (config, source) = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Insights { file, date } => {
            let today = commands::resolve_date(date.as_deref())?;
            commands::cmd_insights(&config, &file, today, cli.json)
        }
        Commands::Dashboard {
            url,
            timeframe,
            category,
            date,
            limit,
        } => {
            let today = commands::resolve_date(date.as_deref())?;
            let timeframe = commands::parse_timeframe(&timeframe)?;
            commands::cmd_dashboard(
                &config,
                url.as_deref(),
                timeframe,
                category,
                today,
                limit,
                cli.json,
            )
            .await
        }
        Commands::Config => commands::cmd_config(&config, &source, cli.json),
    }
}
