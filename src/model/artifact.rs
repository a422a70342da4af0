//! Classifier artifact loading
//!
//! The artifact is a JSON export of a fitted standardize-then-logistic
//! pipeline:
//! - `feature_names` fixes column names and order
//! - `scaler` holds per-column mean and scale
//! - `coefficients` and `intercept` define the linear decision function
//! - `threshold` is the positive-class cutoff baked in at export time
//!
//! Missing or malformed artifacts fail with `ModelError::Load`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::{ModelError, ModelResult};

/// Artifact format this build understands
pub const ARTIFACT_FORMAT_VERSION: u32 = 1;

fn default_threshold() -> f64 {
    0.5
}

/// Per-column standardization parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalerParams {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

/// A fitted binary classifier, read-only after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierArtifact {
    pub format_version: u32,
    pub model_name: String,
    pub feature_names: Vec<String>,
    pub scaler: ScalerParams,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

impl ClassifierArtifact {
    /// Build an artifact in memory, validating its structure.
    pub fn new(
        model_name: impl Into<String>,
        feature_names: Vec<String>,
        scaler: ScalerParams,
        coefficients: Vec<f64>,
        intercept: f64,
        threshold: f64,
    ) -> ModelResult<Self> {
        let artifact = Self {
            format_version: ARTIFACT_FORMAT_VERSION,
            model_name: model_name.into(),
            feature_names,
            scaler,
            coefficients,
            intercept,
            threshold,
        };
        artifact
            .validate_structure()
            .map_err(|reason| ModelError::load("<in-memory>", reason))?;
        Ok(artifact)
    }

    /// Load and validate an artifact file.
    pub fn load(path: &Path) -> ModelResult<Self> {
        let display = path.display().to_string();

        let content = fs::read_to_string(path)
            .map_err(|e| ModelError::load(&display, format!("Failed to read file: {}", e)))?;

        Self::from_json_str(&content).map_err(|e| match e {
            ModelError::Load { reason, .. } => ModelError::load(&display, reason),
            other => other,
        })
    }

    /// Parse and validate an artifact from JSON text.
    pub fn from_json_str(content: &str) -> ModelResult<Self> {
        let artifact: ClassifierArtifact = serde_json::from_str(content)
            .map_err(|e| ModelError::load("<inline>", format!("Invalid JSON: {}", e)))?;

        artifact
            .validate_structure()
            .map_err(|reason| ModelError::load("<inline>", reason))?;

        Ok(artifact)
    }

    /// Check internal consistency.
    pub fn validate_structure(&self) -> Result<(), String> {
        if self.format_version != ARTIFACT_FORMAT_VERSION {
            return Err(format!(
                "Unsupported format_version {} (expected {})",
                self.format_version, ARTIFACT_FORMAT_VERSION
            ));
        }

        let n = self.feature_names.len();
        if n == 0 {
            return Err("feature_names must not be empty".into());
        }
        if self.coefficients.len() != n {
            return Err(format!(
                "coefficients has {} entries, feature_names has {}",
                self.coefficients.len(),
                n
            ));
        }
        if self.scaler.mean.len() != n || self.scaler.scale.len() != n {
            return Err(format!(
                "scaler must have {} mean and scale entries (got {} and {})",
                n,
                self.scaler.mean.len(),
                self.scaler.scale.len()
            ));
        }

        for (i, name) in self.feature_names.iter().enumerate() {
            if name.is_empty() {
                return Err(format!("feature_names[{}] is empty", i));
            }
            if self.feature_names[..i].contains(name) {
                return Err(format!("duplicate feature name '{}'", name));
            }
        }

        if self.scaler.scale.iter().any(|s| !s.is_finite() || *s == 0.0) {
            return Err("scaler.scale entries must be finite and non-zero".into());
        }
        if self
            .scaler
            .mean
            .iter()
            .chain(self.coefficients.iter())
            .any(|v| !v.is_finite())
            || !self.intercept.is_finite()
        {
            return Err("weights must be finite".into());
        }
        if !(self.threshold > 0.0 && self.threshold < 1.0) {
            return Err(format!("threshold {} must lie in (0, 1)", self.threshold));
        }

        Ok(())
    }

    /// Linear decision function over schema-ordered values.
    ///
    /// Callers must have checked the column schema first.
    pub(crate) fn decision_function(&self, values: &[f64]) -> f64 {
        values
            .iter()
            .zip(self.coefficients.iter())
            .zip(self.scaler.mean.iter().zip(self.scaler.scale.iter()))
            .fold(self.intercept, |acc, ((x, coef), (mean, scale))| {
                acc + coef * (x - mean) / scale
            })
    }
}
