//! Budget progress bars

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::CategoryBudget;

/// How much of a budget has been used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    UnderBudget,
    NearBudget,
    OverBudget,
}

impl BudgetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetStatus::UnderBudget => "under_budget",
            BudgetStatus::NearBudget => "near_budget",
            BudgetStatus::OverBudget => "over_budget",
        }
    }

    /// Bar color used by the web dashboard
    pub fn color(&self) -> &'static str {
        match self {
            BudgetStatus::UnderBudget => "#2ecc71",
            BudgetStatus::NearBudget => "#f39c12",
            BudgetStatus::OverBudget => "#e74c3c",
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One category's budget rendered as a progress bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetProgress {
    pub category: String,
    pub budget: f64,
    pub spent: f64,
    pub remaining: f64,
    /// spent / budget as a percentage, not clamped (`None` for a zero budget)
    pub utilization: Option<f64>,
    /// Bar fill, clamped to 0..=100
    pub progress: f64,
    pub status: BudgetStatus,
}

impl BudgetProgress {
    pub fn from_budget(budget: &CategoryBudget, near_limit_pct: f64) -> Self {
        let utilization =
            (budget.budget > 0.0).then(|| budget.spent / budget.budget * 100.0);

        // Any spending against a zero budget counts as over it
        let effective = utilization.unwrap_or(if budget.spent > 0.0 { f64::INFINITY } else { 0.0 });

        let status = if effective > 100.0 {
            BudgetStatus::OverBudget
        } else if effective > near_limit_pct {
            BudgetStatus::NearBudget
        } else {
            BudgetStatus::UnderBudget
        };

        Self {
            category: budget.category.clone(),
            budget: budget.budget,
            spent: budget.spent,
            remaining: budget.remaining,
            utilization,
            progress: effective.clamp(0.0, 100.0),
            status,
        }
    }

    pub fn is_over(&self) -> bool {
        self.remaining < 0.0
    }

    /// "250.00 remaining" or "40.00 over budget"
    pub fn remaining_label(&self, currency: &str) -> String {
        let suffix = if self.is_over() {
            "over budget"
        } else {
            "remaining"
        };
        format!("{}{:.2} {}", currency, self.remaining.abs(), suffix)
    }
}
