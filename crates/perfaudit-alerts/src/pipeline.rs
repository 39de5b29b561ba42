//! Evaluation orchestration
//!
//! Glue between the pure engine and its side-effecting collaborators:
//! load the active rules/budgets from an injected provider, evaluate, and
//! only then record and dispatch. Evaluation itself never performs I/O, so
//! a broken dispatcher can never corrupt a verdict.

use crate::dispatcher::NotificationDispatcher;
use crate::store::{BudgetViolationLog, NotificationStore};
use perfaudit_core::MetricRecord;
use perfaudit_rules::{check_budgets, evaluate, Budget, Rule, Verdict};

/// Source of the active rule set
pub trait RuleProvider {
    /// Rules that should participate in evaluation (enabled only)
    fn active_rules(&self) -> Vec<Rule>;
}

/// Source of the active budget set
pub trait BudgetProvider {
    /// Budgets that should participate in checking (enabled only)
    fn active_budgets(&self) -> Vec<Budget>;
}

impl RuleProvider for Vec<Rule> {
    fn active_rules(&self) -> Vec<Rule> {
        self.iter().filter(|r| r.enabled).cloned().collect()
    }
}

impl BudgetProvider for Vec<Budget> {
    fn active_budgets(&self) -> Vec<Budget> {
        self.iter().filter(|b| b.enabled).cloned().collect()
    }
}

/// Evaluate a completed audit and alert on failure.
///
/// A passing verdict leaves the store untouched and dispatches nothing.
/// On failure the notification is recorded first; a dispatch error is
/// logged and swallowed so delivery problems never affect the verdict.
pub fn process_audit(
    audit_id: &str,
    record: &MetricRecord,
    rules: &dyn RuleProvider,
    store: &mut NotificationStore,
    dispatcher: &dyn NotificationDispatcher,
) -> Verdict {
    let active = rules.active_rules();
    let verdict = evaluate(record, &active);

    if verdict.passed {
        tracing::info!(
            audit_id,
            warnings = verdict.warnings.len(),
            "audit passed rule evaluation"
        );
        return verdict;
    }

    tracing::warn!(
        audit_id,
        violations = verdict.violations.len(),
        "audit failed rule evaluation"
    );

    let notification_id = store.record(audit_id, &verdict);
    tracing::debug!(audit_id, notification_id = %notification_id, "notification recorded");

    if let Err(err) = dispatcher.notify(audit_id, &verdict) {
        tracing::warn!(audit_id, error = %err, "notification dispatch failed");
    }

    verdict
}

/// Check a completed audit against the active budgets and log every breach.
///
/// Returns the number of breaches logged.
pub fn process_budgets(
    audit_id: &str,
    record: &MetricRecord,
    budgets: &dyn BudgetProvider,
    log: &mut BudgetViolationLog,
) -> usize {
    let breaches = check_budgets(record, &budgets.active_budgets());
    let count = breaches.len();

    for breach in breaches {
        log.record(audit_id, breach);
    }

    if count > 0 {
        tracing::warn!(audit_id, breaches = count, "budget violations recorded");
    }

    count
}
