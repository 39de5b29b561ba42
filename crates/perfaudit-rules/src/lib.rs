//! PerfAudit Rules: Threshold Rules, Budgets, and the Evaluation Engine
//!
//! This crate holds the domain logic of PerfAudit: declarative threshold
//! rules and budgets over performance metric records, and the pure engine
//! that evaluates them.
//!
//! # Architecture
//!
//! ```text
//! MetricRecord ─┬→ evaluate(record, rules)   → Verdict (pass/fail + violations + warnings)
//!               └→ check_budgets(record, bs) → Vec<BudgetBreach>
//! ```
//!
//! Evaluation is pure and deterministic: no I/O, no shared state, safe to
//! call from any number of threads. Side effects (notification, persistence)
//! belong to the caller, after `evaluate()` returns.
//!
//! # Example
//!
//! ```
//! use perfaudit_core::{metric, MetricRecord};
//! use perfaudit_rules::{default_rules, evaluate};
//!
//! let record = MetricRecord::new()
//!     .with_metric(metric::PERFORMANCE_SCORE, 85.0)
//!     .with_metric(metric::LARGEST_CONTENTFUL_PAINT, 1900.0);
//!
//! let verdict = evaluate(&record, &default_rules());
//! assert!(!verdict.passed); // score 85 falls below the default floor of 90
//! for violation in &verdict.violations {
//!     println!("{}", violation.message);
//! }
//! ```

pub mod budget;
pub mod config;
pub mod engine;
pub mod rule;
pub mod verdict;

pub use budget::{check_budgets, Budget, BudgetBreach};
pub use config::{BudgetDef, RuleDef, RuleSetConfig};
pub use engine::{evaluate, would_pass};
pub use rule::{default_rules, Enforcement, Operator, Rule};
pub use verdict::{Verdict, Violation};
