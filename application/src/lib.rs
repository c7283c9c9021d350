//! Application layer for supplement-advisor
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_LIMIT, RecommendationConfig};
pub use ports::quiz_event_logger::{NoQuizEventLogger, QuizEvent, QuizEventLogger};
pub use use_cases::recommend::{
    RecommendError, RecommendInput, RecommendSupplementsUseCase, RecommendationReport,
};
