//! Pollinations Provider
//!
//! Implementation of the LlmProvider trait for the Pollinations text API,
//! a free endpoint that needs no API key. The service proxies several
//! upstream models and is loose about response shape: depending on the
//! model it may answer with an OpenAI-style envelope, a bare JSON object,
//! or plain prose wrapping the payload. Extraction here is tolerant and
//! the cleaned text is handed back for the caller to parse.

use async_trait::async_trait;
use serde_json::Value;

use super::http_client::build_http_client;
use super::provider::{classify_http_status, request_error, strip_json_markers, LlmProvider};
use super::types::{InvokeOptions, ProviderConfig, ProviderError, ProviderResult};

/// Default Pollinations text endpoint
const POLLINATIONS_API_URL: &str = "https://text.pollinations.ai/";

/// Endpoint used for health checks
const POLLINATIONS_MODELS_URL: &str = "https://text.pollinations.ai/models";

/// Pollinations provider
pub struct PollinationsProvider {
    config: ProviderConfig,
    client: reqwest::Client,
}

impl PollinationsProvider {
    /// Create a new Pollinations provider with the given configuration
    pub fn new(config: ProviderConfig) -> Self {
        let client = build_http_client();
        Self { config, client }
    }

    /// Get the API base URL
    fn base_url(&self) -> &str {
        self.config
            .base_url
            .as_deref()
            .unwrap_or(POLLINATIONS_API_URL)
    }

    /// Build the request body for the API
    fn build_request_body(&self, prompt: &str, opts: &InvokeOptions) -> serde_json::Value {
        let mut body = serde_json::json!({
            "model": self.config.model,
            "temperature": opts.temperature.unwrap_or(self.config.temperature),
            "messages": [
                {
                    "role": "user",
                    "content": prompt,
                }
            ],
        });

        if let Some(top_p) = opts.top_p {
            body["top_p"] = serde_json::json!(top_p);
        }

        if opts.json_mode {
            // Best-effort hint; replies may still arrive fenced or wrapped.
            body["jsonMode"] = serde_json::json!(true);
        }

        body
    }
}

#[async_trait]
impl LlmProvider for PollinationsProvider {
    fn name(&self) -> &'static str {
        "pollinations"
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    async fn invoke(&self, prompt: &str, opts: &InvokeOptions) -> ProviderResult<String> {
        let body = self.build_request_body(prompt, opts);

        let url = self.base_url();
        tracing::debug!("Pollinations invoke POST {} model={}", url, self.config.model);

        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| request_error(&e))?;

        let status = response.status().as_u16();
        let body_text = response.text().await.map_err(|e| request_error(&e))?;

        if status != 200 {
            tracing::warn!(
                "Pollinations API error: HTTP {} from {}: {}",
                status,
                url,
                body_text
            );
            return Err(classify_http_status(status, &body_text, "pollinations"));
        }

        if looks_like_html(&body_text) {
            return Err(ProviderError::InvalidResponse {
                message: "pollinations returned an HTML page instead of a completion".to_string(),
            });
        }

        let content =
            extract_content(&body_text).ok_or_else(|| ProviderError::InvalidResponse {
                message: "pollinations response carried no usable content".to_string(),
            })?;

        Ok(strip_json_markers(&content))
    }

    async fn health_check(&self) -> ProviderResult<()> {
        tracing::debug!("Pollinations health check GET {}", POLLINATIONS_MODELS_URL);

        let response = self
            .client
            .get(POLLINATIONS_MODELS_URL)
            .send()
            .await
            .map_err(|e| request_error(&e))?;

        let status = response.status().as_u16();
        if status == 200 {
            Ok(())
        } else {
            tracing::warn!("Pollinations health check failed: HTTP {}", status);
            let body = response.text().await.unwrap_or_default();
            Err(classify_http_status(status, &body, "pollinations"))
        }
    }

    fn config(&self) -> &ProviderConfig {
        &self.config
    }
}

/// Detect an HTML error or landing page served with status 200.
fn looks_like_html(body: &str) -> bool {
    let head: String = body.trim_start().chars().take(15).collect();
    let lowered = head.to_lowercase();
    lowered.starts_with("<!doctype") || lowered.starts_with("<html")
}

/// Pull the completion text out of whichever envelope the service used.
///
/// Checked in order: OpenAI-style `choices[0].message.content`, a top-level
/// `response` string, a top-level `content` string, then the raw body.
fn extract_content(body: &str) -> Option<String> {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        if let Some(text) = value
            .pointer("/choices/0/message/content")
            .and_then(Value::as_str)
        {
            return non_blank(text);
        }
        if let Some(text) = value.get("response").and_then(Value::as_str) {
            return non_blank(text);
        }
        if let Some(text) = value.get("content").and_then(Value::as_str) {
            return non_blank(text);
        }
        // A bare JSON object is already the payload.
        if value.is_object() || value.is_array() {
            return Some(body.trim().to_string());
        }
    }
    non_blank(body)
}

fn non_blank(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
