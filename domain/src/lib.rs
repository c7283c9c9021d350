//! Domain layer for supplement-advisor
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Quiz
//!
//! A [`QuizResponse`] holds the answers from one quiz session: symptoms,
//! goals, lifestyle descriptors, age bracket and gender.
//!
//! ## Recommendation
//!
//! The [`RecommendationEngine`] scores a response against static
//! [`RecommendationTables`] and returns a ranked, duplicate-free list of
//! [`ScoredRecommendation`]s. Scoring is pure and never fails.
//!
//! ## Catalog
//!
//! The [`SupplementCatalog`] maps identifiers to display copy.

pub mod catalog;
pub mod config;
pub mod core;
pub mod quiz;
pub mod recommendation;

// Re-export commonly used types
pub use catalog::{SupplementCatalog, SupplementInfo};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::error::DomainError;
pub use quiz::QuizResponse;
pub use recommendation::{
    RecommendationEngine, RecommendationTables, ScoredRecommendation, ScoringWeights,
    compute_recommendations,
};
