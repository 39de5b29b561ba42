//! Rules evaluation
//!
//! Pure, deterministic mapping from (metric record, rule set) to a verdict.
//! No I/O, no mutation of inputs; safe to call concurrently.

use crate::rule::{Enforcement, Rule};
use crate::verdict::{Verdict, Violation};
use perfaudit_core::MetricRecord;

/// Evaluate a metric record against a set of threshold rules.
///
/// Rules are checked in input order and violations keep that order. A rule
/// whose metric is absent from the record does not apply and produces
/// neither a violation nor a warning. Disabled rules are skipped even if
/// the caller forgot to pre-filter them. Bad rule configuration can never
/// fail an evaluation: an empty or all-inapplicable rule set yields a
/// vacuous pass.
pub fn evaluate(record: &MetricRecord, rules: &[Rule]) -> Verdict {
    let mut violations = Vec::new();
    let mut warnings = Vec::new();

    for rule in rules {
        if !rule.enabled {
            continue;
        }

        let actual = match record.get(&rule.metric) {
            Some(value) => value,
            // The rule does not apply to this record type (e.g. a FID rule
            // against a Lighthouse-only record).
            None => continue,
        };

        if rule.operator.compare(actual, rule.threshold) {
            let violation = Violation::for_rule(rule, actual);
            match rule.enforcement {
                Enforcement::Hard => violations.push(violation),
                Enforcement::Soft => warnings.push(violation),
            }
        }
    }

    Verdict {
        passed: violations.is_empty(),
        violations,
        warnings,
    }
}

/// Whether a record passes a rule set outright
pub fn would_pass(record: &MetricRecord, rules: &[Rule]) -> bool {
    evaluate(record, rules).passed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Operator;
    use perfaudit_core::metric;

    fn lcp_ceiling(enforcement: Enforcement) -> Rule {
        Rule::new("r_lcp", "LCP Threshold", "lcp", Operator::Gt, 2500.0)
            .with_enforcement(enforcement)
    }

    #[test]
    fn test_empty_rule_set_passes_vacuously() {
        let record = MetricRecord::new().with_metric("lcp", 99_999.0);
        let verdict = evaluate(&record, &[]);

        assert!(verdict.passed);
        assert!(verdict.violations.is_empty());
        assert!(verdict.warnings.is_empty());
    }

    #[test]
    fn test_hard_violation_fails_verdict() {
        let record = MetricRecord::new().with_metric("lcp", 3000.0);
        let verdict = evaluate(&record, &[lcp_ceiling(Enforcement::Hard)]);

        assert!(!verdict.passed);
        assert_eq!(verdict.violations.len(), 1);
        assert_eq!(verdict.violations[0].metric, "lcp");
        assert_eq!(verdict.violations[0].actual, 3000.0);
        assert!(verdict.warnings.is_empty());
    }

    #[test]
    fn test_soft_violation_only_warns() {
        let record = MetricRecord::new().with_metric("lcp", 3000.0);
        let verdict = evaluate(&record, &[lcp_ceiling(Enforcement::Soft)]);

        assert!(verdict.passed);
        assert!(verdict.violations.is_empty());
        assert_eq!(verdict.warnings.len(), 1);
    }

    #[test]
    fn test_within_threshold_is_clean() {
        let record = MetricRecord::new().with_metric("lcp", 2000.0);
        let verdict = evaluate(&record, &[lcp_ceiling(Enforcement::Hard)]);

        assert!(verdict.passed);
        assert!(verdict.is_clean());
    }

    #[test]
    fn test_missing_metric_never_fires() {
        // A FID rule against a record with no FID, under every operator.
        let record = MetricRecord::new().with_metric("lcp", 3000.0);
        for operator in [
            Operator::Gt,
            Operator::Gte,
            Operator::Lt,
            Operator::Lte,
            Operator::Eq,
            Operator::Neq,
        ] {
            let rule = Rule::new("r_fid", "FID", "fid", operator, 0.0);
            let verdict = evaluate(&record, &[rule]);
            assert!(verdict.passed, "operator {} fired on absent metric", operator);
            assert!(verdict.is_clean());
        }
    }

    #[test]
    fn test_disabled_rule_skipped_defensively() {
        let record = MetricRecord::new().with_metric("lcp", 3000.0);
        let verdict = evaluate(&record, &[lcp_ceiling(Enforcement::Hard).disabled()]);

        assert!(verdict.passed);
        assert!(verdict.is_clean());
    }

    #[test]
    fn test_score_floor_polarity() {
        // lt models a floor: fire when the score falls below the threshold.
        let rule = Rule::new(
            "r_score",
            "Performance Score",
            metric::PERFORMANCE_SCORE,
            Operator::Lt,
            90.0,
        );

        let low = MetricRecord::new().with_metric(metric::PERFORMANCE_SCORE, 85.0);
        assert!(!evaluate(&low, std::slice::from_ref(&rule)).passed);

        let high = MetricRecord::new().with_metric(metric::PERFORMANCE_SCORE, 95.0);
        assert!(evaluate(&high, std::slice::from_ref(&rule)).passed);

        // Exactly at the floor does not fire (strict comparison).
        let edge = MetricRecord::new().with_metric(metric::PERFORMANCE_SCORE, 90.0);
        assert!(evaluate(&edge, std::slice::from_ref(&rule)).passed);
    }

    #[test]
    fn test_mixed_hard_and_soft_ordering() {
        let record = MetricRecord::new()
            .with_metric("lcp", 3000.0)
            .with_metric("cls", 0.3)
            .with_metric("ttfb", 900.0);

        let rules = vec![
            Rule::new("r1", "LCP", "lcp", Operator::Gt, 2500.0),
            Rule::new("r2", "TTFB", "ttfb", Operator::Gt, 800.0).soft(),
            Rule::new("r3", "CLS", "cls", Operator::Gt, 0.1),
        ];

        let verdict = evaluate(&record, &rules);
        assert!(!verdict.passed);
        // Hard violations keep rule input order.
        assert_eq!(verdict.violations[0].rule_id, "r1");
        assert_eq!(verdict.violations[1].rule_id, "r3");
        assert_eq!(verdict.warnings[0].rule_id, "r2");
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let record = MetricRecord::new()
            .with_metric("lcp", 3000.0)
            .with_metric("cls", 0.3);
        let rules = vec![
            Rule::new("r1", "LCP", "lcp", Operator::Gt, 2500.0),
            Rule::new("r2", "CLS", "cls", Operator::Gt, 0.1).soft(),
        ];

        let first = evaluate(&record, &rules);
        let second = evaluate(&record, &rules);
        assert_eq!(first, second);
    }
}
