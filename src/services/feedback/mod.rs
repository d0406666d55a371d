//! Feedback
//!
//! Answer evaluation and resume review. Both operations resolve through
//! the provider fallback chain and come back as total records; the only
//! errors callers see are their own malformed inputs.

pub mod analyzer;
pub mod resume;

pub use analyzer::AnswerAnalyzer;
