//! In-memory notification and violation stores
//!
//! Reference implementations of the stores the orchestration layer writes
//! to: a capped notification list with read tracking, and a capped budget
//! violation log. Durable persistence is a collaborator concern.

use chrono::{DateTime, Utc};
use perfaudit_rules::{BudgetBreach, Verdict, Violation};
use serde::{Deserialize, Serialize};

const MAX_NOTIFICATIONS: usize = 100;
const MAX_BUDGET_VIOLATIONS: usize = 500;

/// One recorded alert for a failing verdict
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    /// Unique entry ID
    pub id: String,

    /// Audit the verdict belongs to
    pub audit_id: String,

    /// Hard violations that triggered the alert
    pub violations: Vec<Violation>,

    /// When the alert was recorded
    pub timestamp: DateTime<Utc>,

    /// Whether an operator has seen it
    pub read: bool,
}

/// Capped store of recorded alerts
#[derive(Debug, Clone, Default)]
pub struct NotificationStore {
    entries: Vec<Notification>,
}

impl NotificationStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an alert for a failing verdict, returning the entry id
    pub fn record(&mut self, audit_id: impl Into<String>, verdict: &Verdict) -> String {
        let entry = Notification {
            id: generate_id("ntf"),
            audit_id: audit_id.into(),
            violations: verdict.violations.clone(),
            timestamp: Utc::now(),
            read: false,
        };
        let id = entry.id.clone();

        self.entries.push(entry);
        if self.entries.len() > MAX_NOTIFICATIONS {
            let drain_count = self.entries.len() - MAX_NOTIFICATIONS;
            self.entries.drain(0..drain_count);
        }

        id
    }

    /// All entries, oldest first
    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    /// Entries not yet marked read
    pub fn unread_count(&self) -> usize {
        self.entries.iter().filter(|n| !n.read).count()
    }

    /// Mark one entry read; false if the id is unknown
    pub fn mark_read(&mut self, id: &str) -> bool {
        match self.entries.iter_mut().find(|n| n.id == id) {
            Some(entry) => {
                entry.read = true;
                true
            }
            None => false,
        }
    }

    /// Mark everything read
    pub fn mark_all_read(&mut self) {
        for entry in &mut self.entries {
            entry.read = true;
        }
    }

    /// Drop all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Export to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.entries)
    }
}

/// A budget breach as logged: the breach plus provenance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetViolation {
    /// Unique entry ID
    pub id: String,

    /// Audit the breach was observed on
    pub audit_id: String,

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

    /// When the breach was logged
    pub timestamp: DateTime<Utc>,
}

/// Capped append-only log of budget violations
#[derive(Debug, Clone, Default)]
pub struct BudgetViolationLog {
    entries: Vec<BudgetViolation>,
}

impl BudgetViolationLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one breach, stamping it at append time
    pub fn record(&mut self, audit_id: impl Into<String>, breach: BudgetBreach) -> String {
        let entry = BudgetViolation {
            id: generate_id("bvl"),
            audit_id: audit_id.into(),
            budget_id: breach.budget_id,
            budget_name: breach.budget_name,
            metric: breach.metric,
            limit: breach.limit,
            actual: breach.actual,
            timestamp: Utc::now(),
        };
        let id = entry.id.clone();

        self.entries.push(entry);
        if self.entries.len() > MAX_BUDGET_VIOLATIONS {
            let drain_count = self.entries.len() - MAX_BUDGET_VIOLATIONS;
            self.entries.drain(0..drain_count);
        }

        id
    }

    /// All entries, oldest first
    pub fn entries(&self) -> &[BudgetViolation] {
        &self.entries
    }

    /// Entries logged against one audit
    pub fn entries_for_audit(&self, audit_id: &str) -> Vec<&BudgetViolation> {
        self.entries
            .iter()
            .filter(|v| v.audit_id == audit_id)
            .collect()
    }

    /// Entries logged against one budget
    pub fn entries_for_budget(&self, budget_id: &str) -> Vec<&BudgetViolation> {
        self.entries
            .iter()
            .filter(|v| v.budget_id == budget_id)
            .collect()
    }

    /// Drop all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Export to JSON Lines
    pub fn to_jsonl(&self) -> String {
        self.entries
            .iter()
            .filter_map(|e| serde_json::to_string(e).ok())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn generate_id(prefix: &str) -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let timestamp = Utc::now().timestamp_millis();
    let counter = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{}_{:x}_{:04x}", prefix, timestamp, counter % 0xFFFF)
}
