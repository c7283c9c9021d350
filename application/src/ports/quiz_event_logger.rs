//! Port for structured quiz event logging.
//!
//! Defines the [`QuizEventLogger`] trait for recording what happened in a
//! quiz session (answers submitted, recommendations produced) to a
//! structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures one
//! machine-readable record per event (e.g. JSONL).

use advisor_domain::{QuizResponse, ScoredRecommendation};
use serde::Serialize;

/// A structured quiz event.
///
/// Serializes with a `type` tag (`"quiz_submitted"`,
/// `"recommendations_generated"`). Adapters add the timestamp when writing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuizEvent {
    /// Answers accepted for scoring.
    QuizSubmitted { answers: QuizResponse },
    /// Ranked list handed back to the caller.
    RecommendationsGenerated {
        limit: usize,
        recommendations: Vec<ScoredRecommendation>,
        unmatched_labels: Vec<String>,
    },
}

impl QuizEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::QuizSubmitted { .. } => "quiz_submitted",
            Self::RecommendationsGenerated { .. } => "recommendations_generated",
        }
    }
}

/// Port for logging quiz events to a structured log.
///
/// The `log` method is synchronous and non-fallible so that a broken log
/// never affects the recommendations returned to the caller.
pub trait QuizEventLogger: Send + Sync {
    /// Record a quiz event.
    fn log(&self, event: QuizEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoQuizEventLogger;

impl QuizEventLogger for NoQuizEventLogger {
    fn log(&self, _event: QuizEvent) {}
}
