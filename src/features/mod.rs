//! Applicant feature vector
//!
//! The five credit-bureau attributes a loan officer enters for a HELOC
//! screening, in the exact column order the classifier was trained on.

mod vector;

pub use vector::{FeatureBounds, FeatureVector, FEATURE_NAMES};
