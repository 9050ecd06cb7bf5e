//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// SpendLens - Expense dashboard insights from the terminal
#[derive(Parser)]
#[command(name = "spendlens")]
#[command(about = "Expense dashboard, forecasts and spending insights", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to ~/.local/share/spendlens/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the predictive report from a saved /predict_expenses payload
    Insights {
        /// JSON file with `historical` and `predictions`
        #[arg(short, long)]
        file: PathBuf,

        /// Date to analyze as of, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Fetch every dashboard section from the API and show it
    Dashboard {
        /// API base URL (overrides config and SPENDLENS_API_URL)
        #[arg(long)]
        url: Option<String>,

        /// Stats timeframe: week, month, year
        #[arg(short, long, default_value = "month")]
        timeframe: String,

        /// Only list expenses in this category
        #[arg(short, long)]
        category: Option<String>,

        /// Date to analyze as of, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Number of recent expenses to list
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Show the effective configuration and where it was loaded from
    Config,
}
