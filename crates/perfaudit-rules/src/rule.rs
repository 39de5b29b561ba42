//! Threshold rules
//!
//! A rule names a metric, a comparison, a threshold, and an enforcement
//! level. The operator expresses "when is this a problem": a rule is
//! violated when `actual <op> threshold` holds.

use perfaudit_core::metric;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison operator for a rule.
///
/// `Gt` is the usual choice for duration metrics (higher is worse); `Lt`
/// models a floor (e.g. a minimum performance score). One operator space
/// serves both polarities; the rule author picks the intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Gt,
    Gte,
    Lt,
    Lte,
    Eq,
    Neq,
}

impl Operator {
    /// True when `actual` breaches `threshold` under this operator.
    ///
    /// Plain IEEE-754 comparison, no epsilon tolerance.
    pub fn compare(self, actual: f64, threshold: f64) -> bool {
        match self {
            Operator::Gt => actual > threshold,
            Operator::Gte => actual >= threshold,
            Operator::Lt => actual < threshold,
            Operator::Lte => actual <= threshold,
            Operator::Eq => actual == threshold,
            Operator::Neq => actual != threshold,
        }
    }

    /// Parse the stored operator string. Operators are free text at the
    /// storage layer, so this returns `None` for anything unrecognized.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "gt" => Some(Operator::Gt),
            "gte" => Some(Operator::Gte),
            "lt" => Some(Operator::Lt),
            "lte" => Some(Operator::Lte),
            "eq" => Some(Operator::Eq),
            "neq" => Some(Operator::Neq),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Operator::Gt => "gt",
            Operator::Gte => "gte",
            Operator::Lt => "lt",
            Operator::Lte => "lte",
            Operator::Eq => "eq",
            Operator::Neq => "neq",
        };
        write!(f, "{}", s)
    }
}

/// Enforcement level of a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Enforcement {
    /// A violation fails the verdict
    Hard,
    /// A violation is recorded as a warning only
    Soft,
}

impl Enforcement {
    /// Parse the stored enforcement string
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "hard" => Some(Enforcement::Hard),
            "soft" => Some(Enforcement::Soft),
            _ => None,
        }
    }
}

impl fmt::Display for Enforcement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Enforcement::Hard => write!(f, "hard"),
            Enforcement::Soft => write!(f, "soft"),
        }
    }
}

/// A single threshold rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Unique identifier within the active rule set
    pub id: String,

    /// Human-readable name
    pub name: String,

    /// Metric this rule applies to. A record that does not carry the
    /// metric is simply out of the rule's scope.
    pub metric: String,

    /// Comparison operator ("when is this a problem")
    pub operator: Operator,

    /// Threshold value
    pub threshold: f64,

    /// Hard violations fail the verdict, soft ones only warn
    pub enforcement: Enforcement,

    /// Whether this rule participates in evaluation
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_true() -> bool {
    true
}

impl Rule {
    /// Create an enabled hard rule
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        metric: impl Into<String>,
        operator: Operator,
        threshold: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            metric: metric.into(),
            operator,
            threshold,
            enforcement: Enforcement::Hard,
            enabled: true,
        }
    }

    /// Set the enforcement level
    pub fn with_enforcement(mut self, enforcement: Enforcement) -> Self {
        self.enforcement = enforcement;
        self
    }

    /// Downgrade to soft enforcement
    pub fn soft(mut self) -> Self {
        self.enforcement = Enforcement::Soft;
        self
    }

    /// Disable the rule
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// Rules seeded when none have been configured.
///
/// These are ordinary rules with no special-casing in the engine; the
/// thresholds match the stock Core Web Vitals guidance.
pub fn default_rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "rule_1",
            "Performance Score",
            metric::PERFORMANCE_SCORE,
            Operator::Lt,
            90.0,
        ),
        Rule::new(
            "rule_2",
            "LCP Threshold",
            metric::LARGEST_CONTENTFUL_PAINT,
            Operator::Gt,
            2500.0,
        ),
        Rule::new(
            "rule_3",
            "CLS Threshold",
            metric::CUMULATIVE_LAYOUT_SHIFT,
            Operator::Gt,
            0.1,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_truth_table() {
        assert!(Operator::Gt.compare(10.0, 5.0));
        assert!(!Operator::Gt.compare(5.0, 5.0));

        assert!(Operator::Gte.compare(10.0, 10.0));
        assert!(!Operator::Gte.compare(9.0, 10.0));

        assert!(Operator::Lt.compare(5.0, 10.0));
        assert!(!Operator::Lt.compare(10.0, 10.0));

        assert!(Operator::Lte.compare(10.0, 10.0));
        assert!(!Operator::Lte.compare(11.0, 10.0));

        assert!(Operator::Eq.compare(10.0, 10.0));
        assert!(!Operator::Eq.compare(10.0, 10.5));

        assert!(Operator::Neq.compare(10.0, 5.0));
        assert!(!Operator::Neq.compare(10.0, 10.0));
    }

    #[test]
    fn test_operator_parse_round_trip() {
        for s in ["gt", "gte", "lt", "lte", "eq", "neq"] {
            let op = Operator::parse(s).unwrap();
            assert_eq!(op.to_string(), s);
        }
        assert_eq!(Operator::parse("between"), None);
        assert_eq!(Operator::parse("GT"), None);
    }

    #[test]
    fn test_enforcement_parse() {
        assert_eq!(Enforcement::parse("hard"), Some(Enforcement::Hard));
        assert_eq!(Enforcement::parse("soft"), Some(Enforcement::Soft));
        assert_eq!(Enforcement::parse("strict"), None);
    }

    #[test]
    fn test_rule_builder() {
        let rule = Rule::new("r1", "TTFB ceiling", "time_to_first_byte", Operator::Gt, 800.0)
            .soft()
            .disabled();

        assert_eq!(rule.enforcement, Enforcement::Soft);
        assert!(!rule.enabled);
    }

    #[test]
    fn test_rule_serde_lowercase() {
        let rule = Rule::new("r1", "LCP", "largest_contentful_paint", Operator::Gt, 2500.0);
        let json = serde_json::to_string(&rule).unwrap();
        assert!(json.contains(r#""operator":"gt""#));
        assert!(json.contains(r#""enforcement":"hard""#));
    }

    #[test]
    fn test_default_rules() {
        let rules = default_rules();
        assert_eq!(rules.len(), 3);
        assert!(rules.iter().all(|r| r.enabled));
        assert!(rules.iter().all(|r| r.enforcement == Enforcement::Hard));

        let score = &rules[0];
        assert_eq!(score.metric, metric::PERFORMANCE_SCORE);
        assert_eq!(score.operator, Operator::Lt);
        assert_eq!(score.threshold, 90.0);
    }
}
