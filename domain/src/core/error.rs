//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Scoring itself never fails; these cover the values that feed it
/// (weights from configuration, user-selected output formats).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid weight for {name}: {value} (must be a finite number greater than zero)")]
    InvalidWeight { name: &'static str, value: f64 },

    #[error("Unknown output format: {0}. Valid: full, summary, json")]
    InvalidOutputFormat(String),
}

impl DomainError {
    /// Check if this error came from a scoring weight
    pub fn is_weight_error(&self) -> bool {
        matches!(self, DomainError::InvalidWeight { .. })
    }
}
