//! Base increments added per matched table entry

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Base score increments for each answer kind
///
/// Symptom increments are further multiplied by the symptom's priority
/// factor; goal and lifestyle increments are added as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Added per supplement listed for a reported symptom
    pub symptom_increment: f64,
    /// Added per supplement listed for a stated goal
    pub goal_increment: f64,
    /// Added per supplement listed for a lifestyle key
    pub lifestyle_increment: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            symptom_increment: 3.0,
            goal_increment: 2.0,
            lifestyle_increment: 1.0,
        }
    }
}

impl ScoringWeights {
    pub fn with_symptom_increment(mut self, value: f64) -> Self {
        self.symptom_increment = value;
        self
    }

    pub fn with_goal_increment(mut self, value: f64) -> Self {
        self.goal_increment = value;
        self
    }

    pub fn with_lifestyle_increment(mut self, value: f64) -> Self {
        self.lifestyle_increment = value;
        self
    }

    /// Named increments, for validation and diagnostics
    pub fn entries(&self) -> [(&'static str, f64); 3] {
        [
            ("symptom_increment", self.symptom_increment),
            ("goal_increment", self.goal_increment),
            ("lifestyle_increment", self.lifestyle_increment),
        ]
    }

    /// Every increment must be finite and strictly positive
    pub fn validate(&self) -> Result<(), DomainError> {
        for (name, value) in self.entries() {
            if !value.is_finite() || value <= 0.0 {
                return Err(DomainError::InvalidWeight { name, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let weights = ScoringWeights::default();
        assert_eq!(weights.symptom_increment, 3.0);
        assert_eq!(weights.goal_increment, 2.0);
        assert_eq!(weights.lifestyle_increment, 1.0);
        assert!(weights.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive() {
        let weights = ScoringWeights::default().with_goal_increment(0.0);
        assert_eq!(
            weights.validate(),
            Err(DomainError::InvalidWeight {
                name: "goal_increment",
                value: 0.0
            })
        );
    }

    #[test]
    fn test_rejects_nan() {
        let weights = ScoringWeights::default().with_lifestyle_increment(f64::NAN);
        assert!(weights.validate().unwrap_err().is_weight_error());
    }

    #[test]
    fn test_partial_deserialize_keeps_defaults() {
        let weights: ScoringWeights = serde_json::from_str(r#"{"goal_increment": 4.5}"#).unwrap();
        assert_eq!(weights.goal_increment, 4.5);
        assert_eq!(weights.symptom_increment, 3.0);
    }
}
