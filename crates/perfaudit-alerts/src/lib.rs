//! PerfAudit Alerts: Dispatch Seam, Stores, and Orchestration
//!
//! Downstream of the rules engine: this crate wires a verdict to its side
//! effects. Evaluation stays pure in `perfaudit-rules`; here the caller
//! injects where rules come from ([`RuleProvider`]), where alerts go
//! ([`NotificationDispatcher`]), and where they are kept
//! ([`NotificationStore`], [`BudgetViolationLog`]).
//!
//! # Example
//!
//! ```
//! use perfaudit_alerts::{process_audit, NotificationStore, NullDispatcher};
//! use perfaudit_core::{metric, MetricRecord};
//! use perfaudit_rules::default_rules;
//!
//! let record = MetricRecord::new().with_metric(metric::PERFORMANCE_SCORE, 85.0);
//! let mut store = NotificationStore::new();
//!
//! let verdict = process_audit("audit_42", &record, &default_rules(), &mut store, &NullDispatcher);
//! assert!(!verdict.passed);
//! assert_eq!(store.unread_count(), 1);
//! ```

pub mod dispatcher;
pub mod pipeline;
pub mod store;

pub use dispatcher::{AlertError, NotificationDispatcher, NullDispatcher};
pub use pipeline::{process_audit, process_budgets, BudgetProvider, RuleProvider};
pub use store::{BudgetViolation, BudgetViolationLog, Notification, NotificationStore};
