//! # Screening Errors

use thiserror::Error;

use crate::model::ModelError;

/// Result type for screening operations
pub type ScreeningResult<T> = Result<T, ScreeningError>;

/// Errors surfaced to whoever submitted the screening
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ScreeningError {
    /// Scorer rejected the request
    #[error(transparent)]
    Model(#[from] ModelError),
}

impl ScreeningError {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            ScreeningError::Model(e) => e.code(),
        }
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            ScreeningError::Model(e) => e.status_code(),
        }
    }
}
