//! Recommendation domain
//!
//! Maps a [`QuizResponse`](crate::quiz::QuizResponse) to a ranked list of
//! supplements using static rule tables.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  QuizResponse                                                │
//! │    symptoms ──► SYMPTOM_RECOMMENDATIONS × PRIORITY_FACTORS   │
//! │    goals    ──► GOAL_RECOMMENDATIONS                         │
//! │    lifestyle──► LIFESTYLE_RECOMMENDATIONS                    │
//! │                          ↓                                   │
//! │              accumulated score per supplement                │
//! │                          ↓                                   │
//! │    age      ──► × AGE_FACTORS                                │
//! │    gender   ──► × GENDER_FACTORS                             │
//! │                          ↓                                   │
//! │        stable sort (score desc) → drop zero → take N         │
//! └──────────────────────────────────────────────────────────────┘
//! ```

pub mod builtin;
pub mod engine;
pub mod scored;
pub mod tables;
pub mod weights;

pub use engine::{RecommendationEngine, compute_recommendations};
pub use scored::ScoredRecommendation;
pub use tables::RecommendationTables;
pub use weights::ScoringWeights;
