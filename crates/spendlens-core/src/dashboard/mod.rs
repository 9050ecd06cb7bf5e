//! Dashboard view models
//!
//! - `stats` - Summary cards and category/trend chart data
//! - `budget` - Budget progress bars and status bands
//! - `refresh` - Concurrent loading of every dashboard section

pub mod budget;
pub mod refresh;
pub mod stats;

pub use budget::{BudgetProgress, BudgetStatus};
pub use refresh::{DashboardRefresher, DashboardSnapshot, RefreshRequest};
pub use stats::{ChartData, StatsSummary, TopCategory};
