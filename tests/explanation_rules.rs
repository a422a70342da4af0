//! Explanation Rule Tests
//!
//! - Thresholds trigger exactly at their documented boundaries
//! - Rules are independent and keep their fixed order
//! - Output depends only on the feature vector

use heloc_screen::explain::{explain, ExplanationEngine, RuleRegistry};
use heloc_screen::features::FeatureVector;
use heloc_screen::model::Decision;

const LOW_RISK_REASON: &str = "External risk estimate is low";
const INQUIRIES_REASON: &str = "Too many recent credit inquiries (last 6 months)";
const UTILIZATION_REASON: &str = "High revolving utilization ratio";

/// A vector that triggers nothing, with one field overridden.
fn clean_with(index: usize, value: f64) -> FeatureVector {
    let mut values = [90.0, 0.0, 10.0, 25.0, 120.0];
    values[index] = value;
    FeatureVector::from_array(values)
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_low_risk_case_triggers_nothing() {
    let e = explain(&FeatureVector::new(90.0, 0.0, 10.0, 25.0, 120.0), Decision::Forward);
    assert!(e.reasons.is_empty());
    assert!(e.tips.is_empty());
}

#[test]
fn test_high_risk_case_triggers_all_five_in_order() {
    let e = explain(&FeatureVector::new(45.0, 8.0, 85.0, 5.0, 20.0), Decision::NotForwarded);
    assert_eq!(
        e.reasons,
        vec![
            "External risk estimate is low",
            "Too many recent credit inquiries (last 6 months)",
            "High revolving utilization ratio",
            "Low number of satisfactory trades",
            "Short credit history (average months in file is low)",
        ]
    );
    assert_eq!(
        e.tips,
        vec![
            "Improve credit score over time",
            "Avoid applying for new credit for a few months",
            "Reduce credit utilization (aim below 30%)",
            "Build more on-time payment history",
            "Maintain accounts longer to build credit history",
        ]
    );
}

// =============================================================================
// Boundaries
// =============================================================================

#[test]
fn test_external_risk_estimate_boundary_is_strict() {
    let at = explain(&clean_with(0, 60.0), Decision::NotForwarded);
    assert!(!at.reasons.contains(&LOW_RISK_REASON.to_string()));

    let below = explain(&clean_with(0, 59.0), Decision::NotForwarded);
    assert_eq!(below.reasons, vec![LOW_RISK_REASON]);
}

#[test]
fn test_utilization_boundary_is_inclusive() {
    let at = explain(&clean_with(2, 50.0), Decision::NotForwarded);
    assert_eq!(at.reasons, vec![UTILIZATION_REASON]);

    let below = explain(&clean_with(2, 49.0), Decision::NotForwarded);
    assert!(below.reasons.is_empty());
}

#[test]
fn test_inquiries_boundary() {
    let three = explain(&clean_with(1, 3.0), Decision::NotForwarded);
    assert_eq!(three.reasons, vec![INQUIRIES_REASON]);

    let two = explain(&clean_with(1, 2.0), Decision::NotForwarded);
    assert!(two.reasons.is_empty());
}

#[test]
fn test_trades_and_history_boundaries() {
    assert!(explain(&clean_with(3, 10.0), Decision::Forward).reasons.is_empty());
    assert_eq!(explain(&clean_with(3, 9.0), Decision::Forward).reasons.len(), 1);
    assert!(explain(&clean_with(4, 60.0), Decision::Forward).reasons.is_empty());
    assert_eq!(explain(&clean_with(4, 59.0), Decision::Forward).reasons.len(), 1);
}

#[test]
fn test_rules_applied_record_observed_values() {
    let v = FeatureVector::new(59.5, 3.0, 50.0, 10.0, 60.0);
    let e = explain(&v, Decision::NotForwarded);

    let triggered: Vec<_> = e
        .rules_applied
        .iter()
        .filter(|r| r.triggered)
        .map(|r| r.rule_id.as_str())
        .collect();
    assert_eq!(triggered, vec!["HELOC-R1", "HELOC-R2", "HELOC-R3"]);
    assert_eq!(e.rules_applied[0].observed, 59.5);
}

// =============================================================================
// Determinism and Independence
// =============================================================================

#[test]
fn test_explanation_is_deterministic() {
    let engine = ExplanationEngine::default();
    let v = FeatureVector::new(55.0, 4.0, 30.0, 12.0, 40.0);
    let first = engine.explain(&v, Decision::NotForwarded);
    for _ in 0..100 {
        assert_eq!(engine.explain(&v, Decision::NotForwarded), first);
    }
}

#[test]
fn test_decision_does_not_change_rule_results() {
    let v = FeatureVector::new(45.0, 8.0, 85.0, 5.0, 20.0);
    let forward = explain(&v, Decision::Forward);
    let rejected = explain(&v, Decision::NotForwarded);
    assert_eq!(forward.reasons, rejected.reasons);
    assert_eq!(forward.rules_applied, rejected.rules_applied);
}

#[test]
fn test_each_rule_fires_alone() {
    let registry = RuleRegistry::heloc();
    let triggering = [59.0, 3.0, 50.0, 9.0, 59.0];

    for (i, rule) in registry.rules().iter().enumerate() {
        let v = clean_with(i, triggering[i]);
        assert!(rule.triggers(&v), "{} should trigger", rule);
        let e = explain(&v, Decision::NotForwarded);
        assert_eq!(e.reasons, vec![rule.reason]);
        assert_eq!(e.tips, vec![rule.tip]);
    }
}
