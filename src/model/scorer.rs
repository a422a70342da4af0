//! Single-row scoring against a loaded artifact

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::artifact::ClassifierArtifact;
use super::errors::{ModelError, ModelResult};
use crate::features::FeatureVector;

/// Binary screening outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// Application goes to a human loan officer
    Forward,
    /// Application stops at preliminary screening
    NotForwarded,
}

impl Decision {
    /// Class label as the classifier reports it (1 = positive class).
    pub fn label(&self) -> u8 {
        match self {
            Decision::Forward => 1,
            Decision::NotForwarded => 0,
        }
    }

    pub fn is_forward(&self) -> bool {
        matches!(self, Decision::Forward)
    }

    /// Text shown next to the probability.
    pub fn display_label(&self) -> &'static str {
        match self {
            Decision::Forward => "Forward to Loan Officer",
            Decision::NotForwarded => "Not Forwarded",
        }
    }
}

impl From<bool> for Decision {
    fn from(forward: bool) -> Self {
        if forward {
            Decision::Forward
        } else {
            Decision::NotForwarded
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_label())
    }
}

/// Classifier output for one applicant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Estimated likelihood of the positive (approve) class
    pub probability: f64,
    pub decision: Decision,
}

/// Scores feature vectors with an injected, read-only artifact.
#[derive(Debug, Clone)]
pub struct ModelScorer {
    artifact: Arc<ClassifierArtifact>,
}

impl ModelScorer {
    pub fn new(artifact: Arc<ClassifierArtifact>) -> Self {
        Self { artifact }
    }

    pub fn artifact(&self) -> &ClassifierArtifact {
        &self.artifact
    }

    /// Score one applicant.
    pub fn score(&self, vector: &FeatureVector) -> ModelResult<ScoreResult> {
        self.score_columns(&vector.columns())
    }

    /// Score raw `(name, value)` columns.
    ///
    /// Names and order must match the artifact's `feature_names` exactly.
    pub fn score_columns(&self, columns: &[(&str, f64)]) -> ModelResult<ScoreResult> {
        let expected = &self.artifact.feature_names;
        let schema_matches = columns.len() == expected.len()
            && columns
                .iter()
                .zip(expected.iter())
                .all(|((name, _), want)| *name == want.as_str());

        if !schema_matches {
            let actual: Vec<&str> = columns.iter().map(|(name, _)| *name).collect();
            return Err(ModelError::schema(expected, actual));
        }

        let values: Vec<f64> = columns.iter().map(|(_, value)| *value).collect();
        let probability = sigmoid(self.artifact.decision_function(&values));

        Ok(ScoreResult {
            probability,
            decision: Decision::from(probability > self.artifact.threshold),
        })
    }
}

/// Logistic function, stable for large |z|. NaN input yields NaN.
fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::FEATURE_NAMES;
    use crate::model::ScalerParams;

    fn scorer_with(coefficients: Vec<f64>, intercept: f64) -> ModelScorer {
        let artifact = ClassifierArtifact::new(
            "unit",
            FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
            ScalerParams {
                mean: vec![0.0; 5],
                scale: vec![1.0; 5],
            },
            coefficients,
            intercept,
            0.5,
        )
        .unwrap();
        ModelScorer::new(Arc::new(artifact))
    }

    #[test]
    fn test_sigmoid() {
        assert!((sigmoid(0.0) - 0.5).abs() < 1e-12);
        assert!(sigmoid(800.0) <= 1.0);
        assert!(sigmoid(-800.0) >= 0.0);
        assert!((sigmoid(2.0) + sigmoid(-2.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_exact_threshold_is_not_forward() {
        // logit 0 -> probability exactly 0.5
        let scorer = scorer_with(vec![0.0; 5], 0.0);
        let result = scorer.score(&FeatureVector::form_defaults()).unwrap();
        assert_eq!(result.probability, 0.5);
        assert_eq!(result.decision, Decision::NotForwarded);
    }

    #[test]
    fn test_positive_logit_forwards() {
        let scorer = scorer_with(vec![0.1, 0.0, 0.0, 0.0, 0.0], -1.0);
        let result = scorer.score(&FeatureVector::new(90.0, 0.0, 0.0, 0.0, 0.0)).unwrap();
        assert!(result.probability > 0.5);
        assert_eq!(result.decision, Decision::Forward);
    }

    #[test]
    fn test_reordered_columns_rejected() {
        let scorer = scorer_with(vec![0.0; 5], 0.0);
        let mut columns = FeatureVector::form_defaults().columns();
        columns.swap(0, 1);
        let err = scorer.score_columns(&columns).unwrap_err();
        assert_eq!(err.code(), "HELOC_MODEL_SCHEMA_MISMATCH");
    }

    #[test]
    fn test_missing_column_rejected() {
        let scorer = scorer_with(vec![0.0; 5], 0.0);
        let columns = FeatureVector::form_defaults().columns();
        assert!(scorer.score_columns(&columns[..4]).is_err());
    }

    #[test]
    fn test_decision_labels() {
        assert_eq!(Decision::Forward.label(), 1);
        assert_eq!(Decision::NotForwarded.label(), 0);
        assert_eq!(Decision::Forward.to_string(), "Forward to Loan Officer");
        assert_eq!(
            serde_json::to_string(&Decision::NotForwarded).unwrap(),
            "\"not_forwarded\""
        );
    }
}
