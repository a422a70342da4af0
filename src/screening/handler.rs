//! Screening request handler
//!
//! Presentation-independent entry point: the HTTP form, the JSON API and
//! the CLI all go through `handle_screen_request`.

use std::sync::Arc;

use super::errors::ScreeningResult;
use super::report::ScreeningReport;
use crate::explain::{Explanation, ExplanationEngine};
use crate::features::FeatureVector;
use crate::model::{ClassifierArtifact, ModelScorer, ScoreResult};
use crate::observability::{log_event_with_fields, Event, MetricsRegistry};

/// Scores and explains one applicant per call.
#[derive(Debug, Clone)]
pub struct ScreeningHandler {
    scorer: ModelScorer,
    engine: ExplanationEngine,
    metrics: Arc<MetricsRegistry>,
}

impl ScreeningHandler {
    /// Create a handler with the standard rules and its own counters.
    pub fn new(scorer: ModelScorer) -> Self {
        Self::with_parts(scorer, ExplanationEngine::default(), Arc::new(MetricsRegistry::new()))
    }

    /// Create a handler over a loaded artifact.
    pub fn from_artifact(artifact: Arc<ClassifierArtifact>) -> Self {
        Self::new(ModelScorer::new(artifact))
    }

    pub fn with_parts(
        scorer: ModelScorer,
        engine: ExplanationEngine,
        metrics: Arc<MetricsRegistry>,
    ) -> Self {
        Self {
            scorer,
            engine,
            metrics,
        }
    }

    pub fn scorer(&self) -> &ModelScorer {
        &self.scorer
    }

    pub fn metrics(&self) -> &Arc<MetricsRegistry> {
        &self.metrics
    }

    /// Score the applicant, then explain the resulting decision.
    pub fn handle_screen_request(
        &self,
        vector: &FeatureVector,
    ) -> ScreeningResult<(ScoreResult, Explanation)> {
        let score = match self.scorer.score(vector) {
            Ok(score) => score,
            Err(e) => {
                self.metrics.increment_failures();
                log_event_with_fields(
                    Event::ScreeningFailed,
                    &[("code", e.code()), ("reason", e.to_string().as_str())],
                );
                return Err(e.into());
            }
        };

        let explanation = self.engine.explain(vector, score.decision);

        self.metrics.record_decision(score.decision);
        let probability = format!("{:.3}", score.probability);
        let triggered = explanation.reasons.len().to_string();
        log_event_with_fields(
            Event::ScreeningComplete,
            &[
                ("decision", score.decision.display_label()),
                ("probability", probability.as_str()),
                ("rules_triggered", triggered.as_str()),
            ],
        );

        Ok((score, explanation))
    }

    /// Handle a request and build the rendered report.
    pub fn screen(&self, vector: &FeatureVector) -> ScreeningResult<ScreeningReport> {
        let (score, explanation) = self.handle_screen_request(vector)?;
        Ok(ScreeningReport::new(*vector, score, explanation))
    }
}
