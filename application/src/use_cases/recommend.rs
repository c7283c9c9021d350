//! Recommend Supplements use case.
//!
//! Scores one quiz submission and packages the ranked list together with
//! the diagnostics a caller needs to present it (focus categories, labels
//! that matched nothing).

use crate::config::RecommendationConfig;
use crate::ports::quiz_event_logger::{NoQuizEventLogger, QuizEvent, QuizEventLogger};
use advisor_domain::{
    DomainError, QuizResponse, RecommendationEngine, RecommendationTables, ScoredRecommendation,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while setting up the use case.
///
/// Scoring itself cannot fail; only the configuration can be rejected.
#[derive(Error, Debug)]
pub enum RecommendError {
    #[error("Invalid recommendation config: {0}")]
    InvalidConfig(#[from] DomainError),
}

/// Input for the [`RecommendSupplementsUseCase`].
#[derive(Debug, Clone, Default)]
pub struct RecommendInput {
    /// Quiz answers to score.
    pub response: QuizResponse,
    /// Overrides [`RecommendationConfig::default_limit`] when set.
    pub limit: Option<usize>,
}

impl RecommendInput {
    pub fn new(response: QuizResponse) -> Self {
        Self {
            response,
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Result of one recommendation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationReport {
    /// Ranked recommendations, highest score first.
    pub recommendations: Vec<ScoredRecommendation>,
    /// Health categories touched by the reported symptoms.
    pub focus_categories: Vec<String>,
    /// Answer labels no rule table recognised.
    pub unmatched_labels: Vec<String>,
    /// The limit that was applied.
    pub limit: usize,
}

impl RecommendationReport {
    pub fn is_empty(&self) -> bool {
        self.recommendations.is_empty()
    }
}

/// Use case for turning quiz answers into recommendations.
///
/// 1. Log the submitted answers through the [`QuizEventLogger`] port
/// 2. Score them with the [`RecommendationEngine`]
/// 3. Collect focus categories and unmatched labels
/// 4. Log the generated recommendations and return the report
pub struct RecommendSupplementsUseCase<'a> {
    tables: &'a RecommendationTables,
    config: RecommendationConfig,
    event_logger: Arc<dyn QuizEventLogger>,
}

impl RecommendSupplementsUseCase<'static> {
    /// Create over the compiled-in tables.
    pub fn new(config: RecommendationConfig) -> Result<Self, RecommendError> {
        Self::with_tables(RecommendationTables::builtin(), config)
    }
}

impl<'a> RecommendSupplementsUseCase<'a> {
    /// Create over a custom rule set.
    pub fn with_tables(
        tables: &'a RecommendationTables,
        config: RecommendationConfig,
    ) -> Result<Self, RecommendError> {
        config.validate()?;
        Ok(Self {
            tables,
            config,
            event_logger: Arc::new(NoQuizEventLogger),
        })
    }

    /// Create with a quiz event logger.
    pub fn with_event_logger(mut self, logger: Arc<dyn QuizEventLogger>) -> Self {
        self.event_logger = logger;
        self
    }

    pub fn config(&self) -> &RecommendationConfig {
        &self.config
    }

    /// Score the answers and build the report.
    pub fn execute(&self, input: RecommendInput) -> RecommendationReport {
        let limit = input.limit.unwrap_or(self.config.default_limit);
        let response = &input.response;

        self.event_logger.log(QuizEvent::QuizSubmitted {
            answers: response.clone(),
        });

        let engine = RecommendationEngine::new(self.tables).with_weights(self.config.weights);
        let recommendations = engine.compute(response, limit);
        let focus_categories = engine.focus_categories(response);
        let unmatched_labels = engine.unmatched_labels(response);

        if !unmatched_labels.is_empty() {
            debug!("Ignoring unmatched quiz labels: {:?}", unmatched_labels);
        }

        info!(
            "Generated {} recommendation(s) (limit {}, {} focus area(s))",
            recommendations.len(),
            limit,
            focus_categories.len()
        );

        let report = RecommendationReport {
            recommendations,
            focus_categories,
            unmatched_labels,
            limit,
        };

        self.event_logger.log(QuizEvent::RecommendationsGenerated {
            limit,
            recommendations: report.recommendations.clone(),
            unmatched_labels: report.unmatched_labels.clone(),
        });

        report
    }
}
