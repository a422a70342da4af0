//! Explanation Engine
//!
//! Applies the fixed threshold rules to a feature vector and produces the
//! reason and tip lists shown next to a screening decision.
//!
//! - Every rule is evaluated, independent of the others and of the decision
//! - Output order follows rule order
//! - Pure: identical input yields identical output
//!
//! The rules do not read the classifier. A rejected applicant can show no
//! triggered reasons, and a forwarded one can trigger several.

mod model;
mod rules;

pub use model::{
    Explanation, ExplanationPanel, RuleApplication, FAVORABLE_MESSAGE, FAVORABLE_TITLE,
    NO_REASONS_MESSAGE, NO_TIPS_MESSAGE, REASONS_TITLE, TIPS_TITLE,
};
pub use rules::{Comparison, RuleDefinition, RuleRegistry};

use crate::features::FeatureVector;
use crate::model::Decision;

/// Evaluates a rule registry against applicants.
#[derive(Debug, Clone, Default)]
pub struct ExplanationEngine {
    registry: RuleRegistry,
}

impl ExplanationEngine {
    pub fn new(registry: RuleRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Build the explanation for one applicant and decision.
    pub fn explain(&self, vector: &FeatureVector, decision: Decision) -> Explanation {
        let mut reasons = Vec::new();
        let mut tips = Vec::new();
        let mut rules_applied = Vec::with_capacity(self.registry.len());

        for rule in self.registry.rules() {
            let observed = rule.observed(vector);
            let triggered = rule.comparison.holds(observed, rule.threshold);
            if triggered {
                reasons.push(rule.reason.to_string());
                tips.push(rule.tip.to_string());
            }
            rules_applied.push(RuleApplication::new(rule, observed, triggered));
        }

        Explanation {
            decision,
            reasons,
            tips,
            rules_applied,
        }
    }
}

/// Explain with the standard HELOC rules.
pub fn explain(vector: &FeatureVector, decision: Decision) -> Explanation {
    ExplanationEngine::default().explain(vector, decision)
}
