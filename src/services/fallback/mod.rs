//! Provider Fallback Service
//!
//! Provides ordered fallback across language-model providers with a
//! guaranteed-total result.

mod chain;

pub use chain::{FallbackAttempt, FallbackConfig, ProviderChain, ResolutionLog};
