//! Observable events
//!
//! Every log line names one of these events. Applicant values are never
//! attached to an event.

use std::fmt;

/// Observable events in the screening service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Boot & Lifecycle
    /// Process startup begins
    BootStart,
    /// Configuration loaded and validated
    ConfigLoaded,
    /// Classifier artifact loaded
    ModelLoaded,
    /// Classifier artifact could not be loaded (FATAL)
    ModelLoadFailed,
    /// HTTP listener bound, ready for requests
    Serving,

    // Screening
    /// One applicant scored and explained
    ScreeningComplete,
    /// Scoring rejected the input
    ScreeningFailed,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "BOOT_BEGIN",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::ModelLoaded => "MODEL_LOADED",
            Event::ModelLoadFailed => "MODEL_LOAD_FAILED",
            Event::Serving => "SERVING",
            Event::ScreeningComplete => "SCREENING_COMPLETE",
            Event::ScreeningFailed => "SCREENING_FAILED",
        }
    }

    /// Returns true if this event indicates a fatal condition
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::ModelLoadFailed)
    }

    /// Returns true if this event reports a failure
    pub fn is_failure(&self) -> bool {
        matches!(self, Event::ModelLoadFailed | Event::ScreeningFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(Event::BootStart.as_str(), "BOOT_BEGIN");
        assert_eq!(Event::ScreeningComplete.to_string(), "SCREENING_COMPLETE");
    }

    #[test]
    fn test_only_model_load_failure_is_fatal() {
        assert!(Event::ModelLoadFailed.is_fatal());
        assert!(!Event::ScreeningFailed.is_fatal());
        assert!(Event::ScreeningFailed.is_failure());
        assert!(!Event::Serving.is_failure());
    }
}
