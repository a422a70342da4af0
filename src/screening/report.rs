//! Screening result as shown to the loan officer

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::explain::{Explanation, ExplanationPanel};
use crate::features::FeatureVector;
use crate::model::{Decision, ScoreResult};

pub const DECISION_BANNER_FORWARD: &str = "Application forwarded to loan officer.";
pub const DECISION_BANNER_NOT_FORWARDED: &str =
    "Application not forwarded to loan officer (preliminary screening).";
pub const SCREENING_NOTE: &str = "Note: This tool is for preliminary screening only. \
Final approval decisions are made by a loan officer.";

/// Everything the result view displays for one screening.
#[derive(Debug, Clone, Serialize)]
pub struct ScreeningReport {
    pub inputs: FeatureVector,
    pub probability: f64,
    /// Probability to 3 decimals
    pub probability_display: String,
    pub decision: Decision,
    pub decision_label: String,
    /// Progress bar fill, clamped to [0, 1]
    pub progress: f64,
    pub banner: String,
    pub panels: Vec<ExplanationPanel>,
    pub explanation: Explanation,
    pub note: String,
    pub screened_at: DateTime<Utc>,
}

impl ScreeningReport {
    pub fn new(inputs: FeatureVector, score: ScoreResult, explanation: Explanation) -> Self {
        let banner = match score.decision {
            Decision::Forward => DECISION_BANNER_FORWARD,
            Decision::NotForwarded => DECISION_BANNER_NOT_FORWARDED,
        };

        Self {
            inputs,
            probability: score.probability,
            probability_display: format!("{:.3}", score.probability),
            decision: score.decision,
            decision_label: score.decision.display_label().to_string(),
            progress: clamp_progress(score.probability),
            banner: banner.to_string(),
            panels: explanation.panels(),
            explanation,
            note: SCREENING_NOTE.to_string(),
            screened_at: Utc::now(),
        }
    }

    /// Progress as a whole percentage, for widths and labels.
    pub fn progress_percent(&self) -> u8 {
        (self.progress * 100.0).round() as u8
    }
}

fn clamp_progress(probability: f64) -> f64 {
    if probability.is_nan() {
        return 0.0;
    }
    probability.clamp(0.0, 1.0)
}
