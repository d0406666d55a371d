//! Intervue LLM
//!
//! Provides a unified interface for interacting with multiple LLM providers:
//! - OpenAI (chat completions, native JSON mode)
//! - Pollinations (free text endpoint, no API key)
//!
//! Every client exposes the same `invoke(prompt, options) -> text` contract
//! and the same four-kind failure taxonomy, so the fallback chain can treat
//! vendors interchangeably. Also includes the HTTP client factory.

pub mod http_client;
pub mod openai;
pub mod pollinations;
pub mod provider;
pub mod types;

// Re-export main types
pub use http_client::build_http_client;
pub use openai::OpenAIProvider;
pub use pollinations::PollinationsProvider;
pub use provider::LlmProvider;
pub use types::*;
