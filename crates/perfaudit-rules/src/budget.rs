//! Performance budgets
//!
//! A budget is a ceiling on one metric: a narrower sibling of a rule with
//! the operator fixed at "greater than". Breaches are recorded one by one;
//! there is no hard/soft split and no aggregate pass flag. What to do with
//! a breach (notify, log, ignore) is the caller's decision.

use crate::rule::Operator;
use perfaudit_core::MetricRecord;
use serde::{Deserialize, Serialize};

/// A single performance budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// Unique identifier within the active budget set
    pub id: String,

    /// Human-readable name
    pub name: String,

    /// Metric this budget caps
    pub metric: String,

    /// Ceiling value
    pub limit: f64,

    /// Whether this budget participates in checking
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_true() -> bool {
    true
}

impl Budget {
    /// Create an enabled budget
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        metric: impl Into<String>,
        limit: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            metric: metric.into(),
            limit,
            enabled: true,
        }
    }

    /// Disable the budget
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// One budget ceiling exceeded by a record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetBreach {
    /// The budget that was exceeded
    pub budget_id: String,

    /// Budget name, for display
    pub budget_name: String,

    /// Metric that went over
    pub metric: String,

    /// Configured ceiling
    pub limit: f64,

    /// Measured value
    pub actual: f64,
}

/// Check a metric record against a set of budgets.
///
/// Enabled budgets only; a record that does not carry the budget's metric
/// is out of scope, same policy as rules. The comparison reuses the rule
/// operator primitive with the operator pinned to [`Operator::Gt`].
pub fn check_budgets(record: &MetricRecord, budgets: &[Budget]) -> Vec<BudgetBreach> {
    let mut breaches = Vec::new();

    for budget in budgets {
        if !budget.enabled {
            continue;
        }

        let actual = match record.get(&budget.metric) {
            Some(value) => value,
            None => continue,
        };

        if Operator::Gt.compare(actual, budget.limit) {
            breaches.push(BudgetBreach {
                budget_id: budget.id.clone(),
                budget_name: budget.name.clone(),
                metric: budget.metric.clone(),
                limit: budget.limit,
                actual,
            });
        }
    }

    breaches
}
