//! Scoring configuration from TOML (`[scoring]` section)
//!
//! Example configuration:
//!
//! ```toml
//! [scoring]
//! symptom_increment = 3.0
//! goal_increment = 2.0
//! lifestyle_increment = 1.0
//! default_limit = 5
//! ```

use advisor_application::{DEFAULT_LIMIT, RecommendationConfig};
use advisor_domain::{ConfigIssue, ConfigIssueCode, ScoringWeights};
use serde::{Deserialize, Serialize};

/// Raw scoring configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileScoringConfig {
    /// Added per supplement listed for a symptom (before priority factor)
    pub symptom_increment: f64,
    /// Added per supplement listed for a goal
    pub goal_increment: f64,
    /// Added per supplement listed for a lifestyle key
    pub lifestyle_increment: f64,
    /// Number of recommendations shown when `--limit` is not given
    pub default_limit: usize,
}

impl Default for FileScoringConfig {
    fn default() -> Self {
        let weights = ScoringWeights::default();
        Self {
            symptom_increment: weights.symptom_increment,
            goal_increment: weights.goal_increment,
            lifestyle_increment: weights.lifestyle_increment,
            default_limit: DEFAULT_LIMIT,
        }
    }
}

impl FileScoringConfig {
    pub fn weights(&self) -> ScoringWeights {
        ScoringWeights::default()
            .with_symptom_increment(self.symptom_increment)
            .with_goal_increment(self.goal_increment)
            .with_lifestyle_increment(self.lifestyle_increment)
    }

    /// Convert to application config
    pub fn to_recommendation_config(&self) -> RecommendationConfig {
        RecommendationConfig::default()
            .with_weights(self.weights())
            .with_default_limit(self.default_limit)
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        for (name, value) in self.weights().entries() {
            if !value.is_finite() {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::NonFiniteIncrement,
                    format!("scoring.{}: {} is not a finite number", name, value),
                ));
            } else if value <= 0.0 {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::NonPositiveIncrement,
                    format!("scoring.{}: {} must be greater than zero", name, value),
                ));
            }
        }

        if self.default_limit == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::ZeroLimit,
                "scoring.default_limit is 0; no recommendations will be shown without --limit",
            ));
        }

        issues
    }
}
