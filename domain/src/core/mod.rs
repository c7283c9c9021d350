//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`] — domain-level errors
//! - [`string`] — label and identifier helpers

pub mod error;
pub mod string;
