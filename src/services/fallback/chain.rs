//! Provider Fallback Chain
//!
//! Implements ordered fallback across language-model providers.
//! Each provider gets exactly one attempt under its own deadline; the
//! first reply that parses as JSON wins. When the whole chain fails,
//! the static fallback payload is normalized instead, so resolution
//! always produces a total record.

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use intervue_core::normalize::{normalize, FieldSpec};
use intervue_llm::provider::LlmProvider;
use intervue_llm::types::{InvokeOptions, ProviderError};

/// Configuration for fallback behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackConfig {
    /// Deadline per provider attempt in milliseconds
    #[serde(default = "default_timeout_per_attempt_ms")]
    pub timeout_per_attempt_ms: u64,
}

fn default_timeout_per_attempt_ms() -> u64 {
    30_000
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            timeout_per_attempt_ms: default_timeout_per_attempt_ms(),
        }
    }
}

/// Record of a single provider attempt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackAttempt {
    /// Provider that was tried
    pub provider: String,
    /// Model the provider was configured for
    pub model: String,
    /// Whether this attempt produced a parseable payload
    pub success: bool,
    /// Failure kind if failed
    pub failure_kind: Option<String>,
    /// Error message if failed
    pub error_message: Option<String>,
    /// Duration of the attempt in milliseconds
    pub duration_ms: u64,
    /// Timestamp when attempt started
    pub started_at: String,
}

impl FallbackAttempt {
    /// Create a successful attempt record
    pub fn success(provider: impl Into<String>, model: impl Into<String>, duration_ms: u64) -> Self {
        Self {
            provider: provider.into(),
            model: model.into(),
            success: true,
            failure_kind: None,
            error_message: None,
            duration_ms,
            started_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Create a failed attempt record
    pub fn failure(
        provider: impl Into<String>,
        model: impl Into<String>,
        error: &ProviderError,
        duration_ms: u64,
    ) -> Self {
        Self {
            provider: provider.into(),
            model: model.into(),
            success: false,
            failure_kind: Some(error.kind().to_string()),
            error_message: Some(error.to_string()),
            duration_ms,
            started_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Log of all attempts made while resolving one prompt
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolutionLog {
    /// All attempts made, in chain order
    pub attempts: Vec<FallbackAttempt>,
    /// Total duration across attempts in milliseconds
    pub total_duration_ms: u64,
    /// Provider that produced the final record (None when static content served)
    pub resolved_via: Option<String>,
    /// Whether the static fallback supplied the record
    pub used_static_fallback: bool,
}

impl ResolutionLog {
    /// Create a new log
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an attempt to the log
    pub fn add_attempt(&mut self, attempt: FallbackAttempt) {
        self.total_duration_ms += attempt.duration_ms;
        if attempt.success {
            self.resolved_via = Some(attempt.provider.clone());
        }
        self.attempts.push(attempt);
    }

    /// Get the number of failed attempts
    pub fn failed_attempts_count(&self) -> usize {
        self.attempts.iter().filter(|a| !a.success).count()
    }
}

/// Provider Fallback Chain
///
/// Holds providers in priority order and resolves prompts into
/// normalized records. Providers are awaited one at a time; parallel
/// attempts would spend quota on replies that get discarded.
pub struct ProviderChain {
    /// Providers in order of preference
    providers: Vec<Arc<dyn LlmProvider>>,
    /// Fallback configuration
    config: FallbackConfig,
}

impl ProviderChain {
    /// Create a new chain that tries `providers` strictly in order
    pub fn new(providers: Vec<Arc<dyn LlmProvider>>) -> Self {
        Self {
            providers,
            config: FallbackConfig::default(),
        }
    }

    /// Set the configuration
    pub fn with_config(mut self, config: FallbackConfig) -> Self {
        self.config = config;
        self
    }

    /// Get all provider names in attempt order
    pub fn provider_names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Whether the chain has no providers at all
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Resolve `prompt` into a record matching `schema`.
    ///
    /// Tries each provider once under the per-attempt deadline. A reply
    /// that fails to parse as JSON counts as a failed attempt and the
    /// chain moves on. When every provider has failed, `static_fallback`
    /// (which may itself be partial) is normalized into the result, so
    /// the caller always receives a record with every schema field set.
    pub async fn resolve(
        &self,
        prompt: &str,
        opts: &InvokeOptions,
        schema: &[FieldSpec],
        static_fallback: &Value,
    ) -> (Map<String, Value>, ResolutionLog) {
        let mut log = ResolutionLog::new();
        let timeout = Duration::from_millis(self.config.timeout_per_attempt_ms);

        for provider in &self.providers {
            debug!("Attempting provider {} ({})", provider.name(), provider.model());
            let attempt_start = Instant::now();

            let outcome = match tokio::time::timeout(timeout, provider.invoke(prompt, opts)).await {
                Ok(result) => result,
                Err(_) => Err(ProviderError::Timeout {
                    message: format!(
                        "no reply within {}ms",
                        self.config.timeout_per_attempt_ms
                    ),
                }),
            };
            let duration_ms = attempt_start.elapsed().as_millis() as u64;

            let text = match outcome {
                Ok(text) => text,
                Err(e) => {
                    warn!(
                        "Provider {} failed: {} (kind: {})",
                        provider.name(),
                        e,
                        e.kind()
                    );
                    log.add_attempt(FallbackAttempt::failure(
                        provider.name(),
                        provider.model(),
                        &e,
                        duration_ms,
                    ));
                    continue;
                }
            };

            match serde_json::from_str::<Value>(&text) {
                Ok(parsed) => {
                    info!(
                        "Provider {} resolved in {}ms",
                        provider.name(),
                        duration_ms
                    );
                    log.add_attempt(FallbackAttempt::success(
                        provider.name(),
                        provider.model(),
                        duration_ms,
                    ));
                    return (normalize(Some(&parsed), schema), log);
                }
                Err(parse_err) => {
                    let e = ProviderError::InvalidResponse {
                        message: format!("payload did not parse as JSON: {}", parse_err),
                    };
                    warn!("Provider {} returned garbage: {}", provider.name(), e);
                    log.add_attempt(FallbackAttempt::failure(
                        provider.name(),
                        provider.model(),
                        &e,
                        duration_ms,
                    ));
                }
            }
        }

        info!(
            "All {} providers exhausted, serving static fallback",
            log.attempts.len()
        );
        log.used_static_fallback = true;
        (normalize(Some(static_fallback), schema), log)
    }
}
