//! Verdict and violation types
//!
//! The verdict is the aggregate output of one evaluation call: a pass/fail
//! flag plus itemized violations and warnings, in rule input order.

use crate::rule::{Operator, Rule};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single rule violation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// The rule that was violated (stable identifier, suitable for
    /// deduplication downstream)
    pub rule_id: String,

    /// Metric that breached the threshold
    pub metric: String,

    /// Human-readable description, plain text only
    pub message: String,

    /// Measured value
    pub actual: f64,

    /// Configured threshold
    pub threshold: f64,

    /// Operator that fired
    pub operator: Operator,
}

impl Violation {
    /// Build the violation for a fired rule
    pub fn for_rule(rule: &Rule, actual: f64) -> Self {
        Self {
            rule_id: rule.id.clone(),
            metric: rule.metric.clone(),
            message: format!(
                "{} ({}) failed rule '{}': expected {} {}",
                rule.metric, actual, rule.name, rule.operator, rule.threshold
            ),
            actual,
            threshold: rule.threshold,
            operator: rule.operator,
        }
    }
}

/// The aggregate result of evaluating one record against a rule set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    /// False iff at least one hard rule was violated
    pub passed: bool,

    /// Hard violations, in rule input order
    pub violations: Vec<Violation>,

    /// Soft violations, in rule input order; these never fail the verdict
    pub warnings: Vec<Violation>,
}

impl Verdict {
    /// A vacuously passing verdict (empty or all-inapplicable rule set)
    pub fn passing() -> Self {
        Self {
            passed: true,
            violations: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Whether anything fired at all, hard or soft
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty() && self.warnings.is_empty()
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.passed {
            write!(f, "PASS")?;
        } else {
            write!(f, "FAIL ({} violations)", self.violations.len())?;
        }
        if !self.warnings.is_empty() {
            write!(f, ", {} warnings", self.warnings.len())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_message_format() {
        let rule = Rule::new(
            "rule_2",
            "LCP Threshold",
            "largest_contentful_paint",
            Operator::Gt,
            2500.0,
        );
        let violation = Violation::for_rule(&rule, 3200.0);

        assert_eq!(
            violation.message,
            "largest_contentful_paint (3200) failed rule 'LCP Threshold': expected gt 2500"
        );
        assert_eq!(violation.rule_id, "rule_2");
        assert_eq!(violation.actual, 3200.0);
        assert_eq!(violation.threshold, 2500.0);
    }

    #[test]
    fn test_message_is_plain_text() {
        let rule = Rule::new("r1", "CLS", "cumulative_layout_shift", Operator::Gt, 0.1);
        let violation = Violation::for_rule(&rule, 0.31);
        assert!(!violation.message.contains('<'));
        assert!(violation.message.contains("0.31"));
    }

    #[test]
    fn test_verdict_display() {
        assert_eq!(Verdict::passing().to_string(), "PASS");

        let rule = Rule::new("r1", "LCP", "lcp", Operator::Gt, 2500.0);
        let verdict = Verdict {
            passed: false,
            violations: vec![Violation::for_rule(&rule, 3000.0)],
            warnings: vec![Violation::for_rule(&rule, 3000.0)],
        };
        assert_eq!(verdict.to_string(), "FAIL (1 violations), 1 warnings");
    }

    #[test]
    fn test_verdict_serialization_round_trip() {
        let rule = Rule::new("r1", "LCP", "lcp", Operator::Gt, 2500.0);
        let verdict = Verdict {
            passed: false,
            violations: vec![Violation::for_rule(&rule, 3000.0)],
            warnings: vec![],
        };

        let json = serde_json::to_string(&verdict).unwrap();
        let parsed: Verdict = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, verdict);
    }
}
