//! Provider types
//!
//! Shared types for language-model provider interactions: vendor
//! identity, client configuration, per-call options, and the failure
//! taxonomy the fallback chain classifies errors into.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Supported LLM provider vendors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    OpenAI,
    Pollinations,
}

impl std::fmt::Display for ProviderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderType::OpenAI => write!(f, "openai"),
            ProviderType::Pollinations => write!(f, "pollinations"),
        }
    }
}

/// Configuration for one provider client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub provider: ProviderType,
    /// API key; not every vendor requires one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Endpoint override for proxies and self-hosted gateways
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    pub model: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

fn default_max_tokens() -> u32 {
    2048
}

fn default_temperature() -> f32 {
    0.8
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            provider: ProviderType::OpenAI,
            api_key: None,
            base_url: None,
            model: "gpt-4-turbo-preview".to_string(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
        }
    }
}

/// Per-call generation options
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvokeOptions {
    /// Sampling temperature override; the config value applies when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Nucleus sampling override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    /// Ask the vendor for a structured JSON object where supported
    #[serde(default)]
    pub json_mode: bool,
}

impl InvokeOptions {
    /// Options for a call whose reply must parse as JSON.
    pub fn json() -> Self {
        Self {
            json_mode: true,
            ..Default::default()
        }
    }
}

/// Provider failures, classified for fallback handling.
///
/// Every vendor-specific failure collapses into one of these kinds. The
/// fallback chain treats them all the same way (move on to the next
/// provider) and keeps the kind for its resolution log.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProviderError {
    /// Vendor quota or rate limit exhausted
    #[error("quota exceeded: {message}")]
    QuotaExceeded { message: String },

    /// The call did not complete within its deadline
    #[error("timed out: {message}")]
    Timeout { message: String },

    /// Connection, TLS, or HTTP-level failure
    #[error("transport error: {message}")]
    Transport { message: String },

    /// The vendor answered, but the payload was unusable
    #[error("invalid response: {message}")]
    InvalidResponse { message: String },
}

impl ProviderError {
    /// Stable kind label used in logs and resolution records.
    pub fn kind(&self) -> &'static str {
        match self {
            ProviderError::QuotaExceeded { .. } => "quota_exceeded",
            ProviderError::Timeout { .. } => "timeout",
            ProviderError::Transport { .. } => "transport",
            ProviderError::InvalidResponse { .. } => "invalid_response",
        }
    }
}

/// Result type for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;
