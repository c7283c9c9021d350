//! Recommendation parameters — use case control.
//!
//! [`RecommendationConfig`] groups the values that control
//! [`RecommendSupplementsUseCase`](crate::use_cases::recommend::RecommendSupplementsUseCase):
//! the scoring increments and how many recommendations to return.

use advisor_domain::{DomainError, ScoringWeights};
use serde::{Deserialize, Serialize};

/// Default number of recommendations returned when the caller sets no limit.
pub const DEFAULT_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecommendationConfig {
    /// Base increments per answer kind.
    pub weights: ScoringWeights,
    /// Number of recommendations returned when the input has no override.
    pub default_limit: usize,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            default_limit: DEFAULT_LIMIT,
        }
    }
}

impl RecommendationConfig {
    // ==================== Builder Methods ====================

    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_default_limit(mut self, limit: usize) -> Self {
        self.default_limit = limit;
        self
    }

    /// Check the weights before they reach the engine
    pub fn validate(&self) -> Result<(), DomainError> {
        self.weights.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = RecommendationConfig::default();
        assert_eq!(config.default_limit, 5);
        assert_eq!(config.weights, ScoringWeights::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = RecommendationConfig::default()
            .with_default_limit(3)
            .with_weights(ScoringWeights::default().with_goal_increment(-1.0));
        assert_eq!(config.default_limit, 3);
        assert!(config.validate().is_err());
    }
}
