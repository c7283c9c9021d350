//! Infrastructure layer for supplement-advisor
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, configuration file loading, and quiz
//! answers file parsing.

pub mod config;
pub mod logging;
pub mod quiz;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileLoggingConfig, FileOutputConfig, FileScoringConfig,
};
pub use logging::JsonlQuizEventLogger;
pub use quiz::{AnswersFileError, AnswersFormat, QuizAnswersLoader};
