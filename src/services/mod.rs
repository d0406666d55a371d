//! Services
//!
//! Business logic of the orchestration layer. Services compose the
//! `intervue-llm` providers behind the fallback chain and hand total,
//! already-normalized records to callers.

pub mod emotion;
pub mod fallback;
pub mod feedback;
pub mod questions;
pub mod session;

pub use emotion::EmotionAggregator;
pub use fallback::{FallbackAttempt, FallbackConfig, ProviderChain, ResolutionLog};
pub use feedback::AnswerAnalyzer;
pub use questions::{QuestionBankConfig, QuestionGenerator, SelectionStrategy, VarietySelector};
pub use session::{InMemorySessionStore, SessionStore, SessionTracker};
