//! Configuration boundary for rule and budget definitions
//!
//! Rules and budgets are user-edited configuration and arrive as loosely
//! typed payloads: operators and enforcement levels are free text at the
//! storage layer. This module normalizes them into the validated [`Rule`]
//! and [`Budget`] types before they reach the engine, so a bad definition
//! can never crash or block an evaluation. Anomalies are logged as
//! configuration warnings and the offending entry is dropped or softened.

use crate::budget::Budget;
use crate::rule::{default_rules, Enforcement, Operator, Rule};
use perfaudit_core::PerfAuditError;
use serde::{Deserialize, Serialize};

/// A rule definition as stored: everything a string until validated
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleDef {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub metric: String,
    pub operator: String,
    pub threshold: f64,
    #[serde(default = "default_enforcement")]
    pub enforcement: String,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

/// A budget definition as stored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetDef {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub metric: String,
    pub limit: f64,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_true() -> bool {
    true
}

fn default_enforcement() -> String {
    "soft".to_string()
}

/// The stored rule/budget configuration for one site
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleSetConfig {
    #[serde(default)]
    pub rules: Vec<RuleDef>,
    #[serde(default)]
    pub budgets: Vec<BudgetDef>,
}

impl RuleSetConfig {
    /// Parse from JSON
    pub fn from_json(payload: &str) -> Result<Self, PerfAuditError> {
        serde_json::from_str(payload).map_err(|e| PerfAuditError::ConfigError(e.to_string()))
    }

    /// Parse from YAML
    pub fn from_yaml(payload: &str) -> Result<Self, PerfAuditError> {
        serde_yaml::from_str(payload).map_err(|e| PerfAuditError::ConfigError(e.to_string()))
    }

    /// Validated rules from this configuration.
    ///
    /// Entries with an unknown operator or no id are dropped with a
    /// warning; an unknown enforcement level is softened. Dropping an
    /// unknown-operator rule is observably the same as the engine treating
    /// it as never-violated.
    pub fn rules(&self) -> Vec<Rule> {
        self.rules.iter().filter_map(normalize_rule).collect()
    }

    /// Validated rules, falling back to the default set when none survive
    /// normalization (fresh install, or every entry rejected).
    pub fn rules_or_default(&self) -> Vec<Rule> {
        let rules = self.rules();
        if rules.is_empty() {
            default_rules()
        } else {
            rules
        }
    }

    /// Validated budgets from this configuration
    pub fn budgets(&self) -> Vec<Budget> {
        self.budgets.iter().filter_map(normalize_budget).collect()
    }
}

fn normalize_rule(def: &RuleDef) -> Option<Rule> {
    if def.id.is_empty() {
        tracing::warn!(metric = %def.metric, "rule definition has no id, skipping");
        return None;
    }

    let operator = match Operator::parse(&def.operator) {
        Some(op) => op,
        None => {
            tracing::warn!(
                rule = %def.id,
                operator = %def.operator,
                "unknown operator in rule definition, skipping rule"
            );
            return None;
        }
    };

    let enforcement = match Enforcement::parse(&def.enforcement) {
        Some(level) => level,
        None => {
            tracing::warn!(
                rule = %def.id,
                enforcement = %def.enforcement,
                "unknown enforcement level, treating as soft"
            );
            Enforcement::Soft
        }
    };

    let mut rule = Rule::new(
        def.id.clone(),
        def.name.clone(),
        def.metric.clone(),
        operator,
        def.threshold,
    )
    .with_enforcement(enforcement);
    rule.enabled = def.enabled;
    Some(rule)
}

fn normalize_budget(def: &BudgetDef) -> Option<Budget> {
    if def.id.is_empty() {
        tracing::warn!(metric = %def.metric, "budget definition has no id, skipping");
        return None;
    }

    let mut budget = Budget::new(def.id.clone(), def.name.clone(), def.metric.clone(), def.limit);
    budget.enabled = def.enabled;
    Some(budget)
}
