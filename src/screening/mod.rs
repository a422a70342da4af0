//! Screening request handling
//!
//! One request = score the applicant, explain the decision, build the
//! report a presentation layer renders. No state survives a request.

mod errors;
mod handler;
mod report;

pub use errors::{ScreeningError, ScreeningResult};
pub use handler::ScreeningHandler;
pub use report::{
    ScreeningReport, DECISION_BANNER_FORWARD, DECISION_BANNER_NOT_FORWARDED, SCREENING_NOTE,
};
