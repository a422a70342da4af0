//! heloc-screen - Preliminary HELOC screening
//!
//! Scores five applicant attributes with a pre-trained classifier and
//! annotates the forward/no-forward decision with rule-based reasons.

pub mod cli;
pub mod explain;
pub mod features;
pub mod http_server;
pub mod model;
pub mod observability;
pub mod screening;
