//! # Model Errors
//!
//! Error types for artifact loading and scoring.

use thiserror::Error;

/// Result type for model operations
pub type ModelResult<T> = Result<T, ModelError>;

/// Classifier errors
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ModelError {
    /// Artifact missing, unreadable, malformed, or structurally invalid
    #[error("Failed to load model artifact '{path}': {reason}")]
    Load { path: String, reason: String },

    /// Submitted columns do not match the artifact's expected schema
    #[error("Feature schema mismatch: expected [{}], got [{}]", expected.join(", "), actual.join(", "))]
    Schema {
        expected: Vec<String>,
        actual: Vec<String>,
    },
}

impl ModelError {
    /// Load error for the given path
    pub fn load(path: impl Into<String>, reason: impl Into<String>) -> Self {
        ModelError::Load {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Schema error from expected and submitted column names
    pub fn schema<E, A>(
        expected: impl IntoIterator<Item = E>,
        actual: impl IntoIterator<Item = A>,
    ) -> Self
    where
        E: AsRef<str>,
        A: AsRef<str>,
    {
        ModelError::Schema {
            expected: expected.into_iter().map(|s| s.as_ref().to_string()).collect(),
            actual: actual.into_iter().map(|s| s.as_ref().to_string()).collect(),
        }
    }

    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            ModelError::Load { .. } => "HELOC_MODEL_LOAD_FAILED",
            ModelError::Schema { .. } => "HELOC_MODEL_SCHEMA_MISMATCH",
        }
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            // Bad artifact, nothing the caller can fix
            ModelError::Load { .. } => 500,
            ModelError::Schema { .. } => 422,
        }
    }

    /// A load failure means the process cannot serve requests
    pub fn is_fatal(&self) -> bool {
        matches!(self, ModelError::Load { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ModelError::load("m.json", "missing").code(), "HELOC_MODEL_LOAD_FAILED");
        let schema = ModelError::schema(["a", "b"], ["b", "a"]);
        assert_eq!(schema.code(), "HELOC_MODEL_SCHEMA_MISMATCH");
        assert_eq!(schema.status_code(), 422);
    }

    #[test]
    fn test_load_is_fatal() {
        assert!(ModelError::load("m.json", "missing").is_fatal());
        assert!(!ModelError::schema(["a"], ["b"]).is_fatal());
    }

    #[test]
    fn test_schema_message_lists_columns() {
        let err = ModelError::schema(["ExternalRiskEstimate"], ["Income"]);
        let msg = err.to_string();
        assert!(msg.contains("expected [ExternalRiskEstimate]"));
        assert!(msg.contains("got [Income]"));
    }
}
