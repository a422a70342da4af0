//! Screening counters
//!
//! - Counters only
//! - Monotonic increase, reset on process start
//! - No applicant data

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use crate::model::Decision;

/// Operational counters for the screening service
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Completed screenings
    screenings: AtomicU64,
    /// Screenings forwarded to a loan officer
    forwarded: AtomicU64,
    /// Screenings stopped at preliminary screening
    not_forwarded: AtomicU64,
    /// Screenings that failed in the scorer
    screening_failures: AtomicU64,
}

impl MetricsRegistry {
    /// Create a new metrics registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed screening and its decision
    pub fn record_decision(&self, decision: Decision) {
        self.screenings.fetch_add(1, Ordering::Relaxed);
        match decision {
            Decision::Forward => self.forwarded.fetch_add(1, Ordering::Relaxed),
            Decision::NotForwarded => self.not_forwarded.fetch_add(1, Ordering::Relaxed),
        };
    }

    /// Record a screening the scorer rejected
    pub fn increment_failures(&self) {
        self.screening_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Get completed screenings
    pub fn screenings(&self) -> u64 {
        self.screenings.load(Ordering::Relaxed)
    }

    /// Get all metrics as a snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            screenings: self.screenings.load(Ordering::Relaxed),
            forwarded: self.forwarded.load(Ordering::Relaxed),
            not_forwarded: self.not_forwarded.load(Ordering::Relaxed),
            screening_failures: self.screening_failures.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time snapshot of all metrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub screenings: u64,
    pub forwarded: u64,
    pub not_forwarded: u64,
    pub screening_failures: u64,
}
