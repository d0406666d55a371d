//! Question Generation
//!
//! Personalized interview questions with a static safety net: prompts go
//! through the provider fallback chain, and the injected question banks
//! answer whenever no provider does. Variety between repeated calls comes
//! from an explicit selection strategy, never from hidden global state.

pub mod banks;
pub mod generator;
pub mod variety;

pub use banks::{QuestionBankConfig, QuestionSet};
pub use generator::QuestionGenerator;
pub use variety::{SelectionStrategy, VarietySelector};

pub(crate) use generator::resume_excerpt;
