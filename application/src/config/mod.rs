//! Application-level configuration.
//!
//! - [`RecommendationConfig`] — scoring weights and result limit

pub mod recommendation_config;

pub use recommendation_config::{DEFAULT_LIMIT, RecommendationConfig};
