//! Scored recommendation value object

use serde::{Deserialize, Serialize};

/// A supplement identifier with its accumulated score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRecommendation {
    /// Supplement identifier (e.g. "vitamin_d3")
    pub id: String,
    /// Final score after priority and demographic adjustment
    pub score: f64,
}

impl ScoredRecommendation {
    pub fn new(id: impl Into<String>, score: f64) -> Self {
        Self {
            id: id.into(),
            score,
        }
    }

    /// Score rounded to two decimals for display
    pub fn display_score(&self) -> String {
        format!("{:.2}", self.score)
    }
}
