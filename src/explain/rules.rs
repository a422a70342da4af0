//! Rule Registry
//!
//! The fixed threshold rules behind screening explanations. Every rule has
//! a stable identifier and contributes at most one reason and one tip.
//!
//! These thresholds are a heuristic overlay. They are not derived from the
//! classifier's weights and can disagree with its decision.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::features::FeatureVector;

/// How an observed value is compared to a rule threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    /// Triggers when `value < threshold`
    Below,
    /// Triggers when `value >= threshold`
    AtLeast,
}

impl Comparison {
    pub fn holds(&self, value: f64, threshold: f64) -> bool {
        match self {
            Comparison::Below => value < threshold,
            Comparison::AtLeast => value >= threshold,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Comparison::Below => "<",
            Comparison::AtLeast => ">=",
        }
    }
}

/// A registered explanation rule.
#[derive(Debug, Clone, Copy)]
pub struct RuleDefinition {
    /// Stable rule identifier
    pub rule_id: &'static str,
    /// Classifier column the rule reads
    pub feature: &'static str,
    pub comparison: Comparison,
    pub threshold: f64,
    /// Shown under "Main reasons"
    pub reason: &'static str,
    /// Shown under "How to improve"
    pub tip: &'static str,
    /// Position of `feature` in the schema
    column: usize,
}

impl RuleDefinition {
    /// Value of this rule's feature in the vector.
    pub fn observed(&self, vector: &FeatureVector) -> f64 {
        vector.to_array()[self.column]
    }

    /// Whether the rule triggers for the vector.
    pub fn triggers(&self, vector: &FeatureVector) -> bool {
        self.comparison.holds(self.observed(vector), self.threshold)
    }
}

impl fmt::Display for RuleDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} {} {}",
            self.rule_id,
            self.feature,
            self.comparison.symbol(),
            self.threshold
        )
    }
}

const HELOC_RULES: [RuleDefinition; 5] = [
    RuleDefinition {
        rule_id: "HELOC-R1",
        feature: "ExternalRiskEstimate",
        comparison: Comparison::Below,
        threshold: 60.0,
        reason: "External risk estimate is low",
        tip: "Improve credit score over time",
        column: 0,
    },
    RuleDefinition {
        rule_id: "HELOC-R2",
        feature: "NumInqLast6M",
        comparison: Comparison::AtLeast,
        threshold: 3.0,
        reason: "Too many recent credit inquiries (last 6 months)",
        tip: "Avoid applying for new credit for a few months",
        column: 1,
    },
    RuleDefinition {
        rule_id: "HELOC-R3",
        feature: "NetFractionRevolvingBurden",
        comparison: Comparison::AtLeast,
        threshold: 50.0,
        reason: "High revolving utilization ratio",
        tip: "Reduce credit utilization (aim below 30%)",
        column: 2,
    },
    RuleDefinition {
        rule_id: "HELOC-R4",
        feature: "NumSatisfactoryTrades",
        comparison: Comparison::Below,
        threshold: 10.0,
        reason: "Low number of satisfactory trades",
        tip: "Build more on-time payment history",
        column: 3,
    },
    RuleDefinition {
        rule_id: "HELOC-R5",
        feature: "AverageMInFile",
        comparison: Comparison::Below,
        threshold: 60.0,
        reason: "Short credit history (average months in file is low)",
        tip: "Maintain accounts longer to build credit history",
        column: 4,
    },
];

/// Ordered set of explanation rules.
#[derive(Debug, Clone)]
pub struct RuleRegistry {
    rules: Vec<RuleDefinition>,
}

impl RuleRegistry {
    /// The five HELOC screening rules, in evaluation order.
    pub fn heloc() -> Self {
        Self {
            rules: HELOC_RULES.to_vec(),
        }
    }

    /// Rules in evaluation order.
    pub fn rules(&self) -> &[RuleDefinition] {
        &self.rules
    }

    /// Look up a rule by identifier.
    pub fn get(&self, rule_id: &str) -> Option<&RuleDefinition> {
        self.rules.iter().find(|r| r.rule_id == rule_id)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::heloc()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::FEATURE_NAMES;

    #[test]
    fn test_rules_follow_schema_order() {
        let registry = RuleRegistry::heloc();
        let features: Vec<_> = registry.rules().iter().map(|r| r.feature).collect();
        assert_eq!(features, FEATURE_NAMES.to_vec());
    }

    #[test]
    fn test_rule_ids_unique() {
        let registry = RuleRegistry::heloc();
        for rule in registry.rules() {
            assert_eq!(
                registry.rules().iter().filter(|r| r.rule_id == rule.rule_id).count(),
                1
            );
        }
    }

    #[test]
    fn test_accessor_matches_feature() {
        let v = FeatureVector::new(1.0, 2.0, 3.0, 4.0, 5.0);
        for (rule, (name, value)) in RuleRegistry::heloc().rules().iter().zip(v.columns()) {
            assert_eq!(rule.feature, name);
            assert_eq!(rule.observed(&v), value);
        }
    }

    #[test]
    fn test_comparison_boundaries() {
        assert!(!Comparison::Below.holds(60.0, 60.0));
        assert!(Comparison::Below.holds(59.0, 60.0));
        assert!(Comparison::AtLeast.holds(50.0, 50.0));
        assert!(!Comparison::AtLeast.holds(49.0, 50.0));
    }

    #[test]
    fn test_display() {
        let registry = RuleRegistry::heloc();
        let rule = registry.get("HELOC-R3").unwrap();
        assert_eq!(rule.to_string(), "HELOC-R3: NetFractionRevolvingBurden >= 50");
    }
}
