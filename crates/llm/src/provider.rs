//! LLM Provider Trait
//!
//! Defines the common interface for all LLM providers, plus shared
//! helpers for HTTP status classification and payload cleanup.

use async_trait::async_trait;

use super::types::{InvokeOptions, ProviderConfig, ProviderError, ProviderResult};

/// Trait that all LLM providers must implement.
///
/// Provides a unified interface for:
/// - Single prompt completions (invoke)
/// - Health checking
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Returns the provider name for identification.
    fn name(&self) -> &'static str;

    /// Returns the current model being used.
    fn model(&self) -> &str;

    /// Returns whether this provider supports a native JSON response format.
    ///
    /// Providers without native support still receive prompts that demand
    /// JSON output; their replies just arrive with more wrapping.
    fn supports_json_mode(&self) -> bool {
        false
    }

    /// Send one prompt and return the vendor's text payload.
    ///
    /// Implementations strip markdown fences and language tags from the
    /// payload but never parse it as JSON. The caller owns the parse step,
    /// so an unreachable vendor and a vendor emitting garbage stay
    /// distinguishable in resolution logs.
    async fn invoke(&self, prompt: &str, opts: &InvokeOptions) -> ProviderResult<String>;

    /// Check if the provider is healthy and reachable.
    ///
    /// For keyed APIs this validates the API key; for open endpoints it is
    /// a plain reachability probe.
    async fn health_check(&self) -> ProviderResult<()>;

    /// Get the configuration for this provider.
    fn config(&self) -> &ProviderConfig;
}

/// Helper function to create an error for a provider that requires an API
/// key but has none configured
pub fn missing_api_key_error(provider: &str) -> ProviderError {
    ProviderError::Transport {
        message: format!("API key not configured for {}", provider),
    }
}

/// Helper function to map a reqwest failure into the provider taxonomy
pub fn request_error(err: &reqwest::Error) -> ProviderError {
    if err.is_timeout() {
        ProviderError::Timeout {
            message: err.to_string(),
        }
    } else {
        ProviderError::Transport {
            message: err.to_string(),
        }
    }
}

/// Helper function to classify a non-success HTTP response
pub fn classify_http_status(status: u16, body: &str, provider: &str) -> ProviderError {
    let snippet: String = body.chars().take(200).collect();
    match status {
        429 => ProviderError::QuotaExceeded {
            message: format!("{} returned 429: {}", provider, snippet),
        },
        408 | 504 => ProviderError::Timeout {
            message: format!("{} returned {}: {}", provider, status, snippet),
        },
        _ if mentions_quota(body) => ProviderError::QuotaExceeded {
            message: format!("{} returned {}: {}", provider, status, snippet),
        },
        _ => ProviderError::Transport {
            message: format!("{} returned {}: {}", provider, status, snippet),
        },
    }
}

fn mentions_quota(body: &str) -> bool {
    let lowered = body.to_lowercase();
    lowered.contains("quota") || lowered.contains("rate limit") || lowered.contains("billing")
}

/// Strip markdown code fences and a leading `json` language tag from a
/// vendor payload, leaving the inner text.
///
/// When no fence is present, falls back to the outermost brace- or
/// bracket-delimited span, and finally to the trimmed input.
pub fn strip_json_markers(text: &str) -> String {
    let trimmed = text.trim();

    if let Some(start) = trimmed.find("```") {
        let after = &trimmed[start + 3..];
        let after = after
            .strip_prefix("json")
            .or_else(|| after.strip_prefix("JSON"))
            .unwrap_or(after);
        if let Some(end) = after.find("```") {
            return after[..end].trim().to_string();
        }
    }

    let object_start = trimmed.find('{');
    let array_start = trimmed.find('[');
    let span = match (object_start, array_start) {
        (Some(o), Some(a)) if a < o => delimited_span(trimmed, a, ']'),
        (Some(o), _) => delimited_span(trimmed, o, '}'),
        (None, Some(a)) => delimited_span(trimmed, a, ']'),
        (None, None) => None,
    };

    span.unwrap_or_else(|| trimmed.to_string())
}

fn delimited_span(text: &str, start: usize, close: char) -> Option<String> {
    let end = text.rfind(close)?;
    (start < end).then(|| text[start..=end].to_string())
}
