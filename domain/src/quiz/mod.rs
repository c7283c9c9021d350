//! Quiz domain
//!
//! The answers a user gives in the quiz funnel. A [`QuizResponse`] is built
//! once per quiz session, scored once, then discarded.

pub mod response;

pub use response::QuizResponse;
