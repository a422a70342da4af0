//! Model Scorer
//!
//! Holds the pre-trained classifier artifact and scores one applicant at a
//! time.
//!
//! - The artifact is loaded once by the process entry point and injected
//!   into the scorer as a read-only handle
//! - Scoring is synchronous, with no caching or retries
//! - Column names and order are checked against the artifact on every call

mod artifact;
mod errors;
mod scorer;

pub use artifact::{ClassifierArtifact, ScalerParams, ARTIFACT_FORMAT_VERSION};
pub use errors::{ModelError, ModelResult};
pub use scorer::{Decision, ModelScorer, ScoreResult};
