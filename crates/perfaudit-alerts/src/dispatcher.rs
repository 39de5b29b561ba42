//! Notification dispatch seam
//!
//! Delivery transports (email, webhook) live outside this workspace; the
//! orchestration layer only depends on this trait. Implementations own
//! their retry policy.

use perfaudit_rules::Verdict;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AlertError {
    #[error("DISPATCH/{0}")]
    DispatchFailed(String),
}

/// Consumer of failing verdicts
pub trait NotificationDispatcher: Send + Sync {
    /// Deliver an alert for a failing verdict.
    ///
    /// `audit_id` and the violations' `rule_id`/`metric` fields are stable
    /// identifiers, suitable for deduplication on the transport side.
    fn notify(&self, audit_id: &str, verdict: &Verdict) -> Result<(), AlertError>;
}

/// Dispatcher that drops everything, for callers with alerting disabled
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDispatcher;

impl NotificationDispatcher for NullDispatcher {
    fn notify(&self, _audit_id: &str, _verdict: &Verdict) -> Result<(), AlertError> {
        Ok(())
    }
}
