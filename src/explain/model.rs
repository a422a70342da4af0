//! Explanation Object Model
//!
//! An explanation carries:
//! - `reasons` and `tips` from triggered rules, in rule order
//! - `rules_applied`: every rule with its observed value and result
//! - the decision it was produced for, which controls what gets surfaced

use serde::{Deserialize, Serialize};

use super::rules::{Comparison, RuleDefinition};
use crate::model::Decision;

/// Panel shown for a forwarded application.
pub const FAVORABLE_TITLE: &str = "View contributing factors";
pub const FAVORABLE_MESSAGE: &str =
    "This applicant shows relatively favorable risk indicators based on the provided inputs.";

pub const REASONS_TITLE: &str = "Main reasons";
pub const NO_REASONS_MESSAGE: &str =
    "No specific rule-based reasons were triggered for the selected thresholds.";

pub const TIPS_TITLE: &str = "How to improve";
pub const NO_TIPS_MESSAGE: &str =
    "No improvement suggestions were generated for the selected thresholds.";

/// Record of one rule evaluated against one applicant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleApplication {
    pub rule_id: String,
    pub feature: String,
    pub comparison: Comparison,
    pub threshold: f64,
    pub observed: f64,
    pub triggered: bool,
}

impl RuleApplication {
    pub fn new(rule: &RuleDefinition, observed: f64, triggered: bool) -> Self {
        Self {
            rule_id: rule.rule_id.to_string(),
            feature: rule.feature.to_string(),
            comparison: rule.comparison,
            threshold: rule.threshold,
            observed,
            triggered,
        }
    }
}

/// A collapsible text panel in the result view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplanationPanel {
    pub title: String,
    /// Bullet items; empty when `message` is set
    pub items: Vec<String>,
    /// Plain text shown instead of bullets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ExplanationPanel {
    fn message(title: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            items: Vec::new(),
            message: Some(message.to_string()),
        }
    }

    fn bullets_or(title: &str, items: &[String], fallback: &str) -> Self {
        if items.is_empty() {
            Self::message(title, fallback)
        } else {
            Self {
                title: title.to_string(),
                items: items.to_vec(),
                message: None,
            }
        }
    }
}

/// Rule-based explanation for one screening.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    pub decision: Decision,
    pub reasons: Vec<String>,
    pub tips: Vec<String>,
    pub rules_applied: Vec<RuleApplication>,
}

impl Explanation {
    /// Whether any rule triggered.
    pub fn has_reasons(&self) -> bool {
        !self.reasons.is_empty()
    }

    /// Panels shown to the user.
    ///
    /// A forwarded application gets the favorable message only. A rejected
    /// one gets the reasons and tips, or a fallback line for each.
    pub fn panels(&self) -> Vec<ExplanationPanel> {
        match self.decision {
            Decision::Forward => vec![ExplanationPanel::message(FAVORABLE_TITLE, FAVORABLE_MESSAGE)],
            Decision::NotForwarded => vec![
                ExplanationPanel::bullets_or(REASONS_TITLE, &self.reasons, NO_REASONS_MESSAGE),
                ExplanationPanel::bullets_or(TIPS_TITLE, &self.tips, NO_TIPS_MESSAGE),
            ],
        }
    }
}
