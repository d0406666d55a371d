//! OpenAI Provider
//!
//! Implementation of the LlmProvider trait for OpenAI's chat completions
//! API. Requests the native JSON response format when asked, so structured
//! payloads come back as bare JSON objects instead of fenced markdown.

use async_trait::async_trait;
use serde::Deserialize;

use super::http_client::build_http_client;
use super::provider::{
    classify_http_status, missing_api_key_error, request_error, strip_json_markers, LlmProvider,
};
use super::types::{InvokeOptions, ProviderConfig, ProviderError, ProviderResult};

/// Default OpenAI API endpoint
const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Endpoint used for health checks
const OPENAI_MODELS_URL: &str = "https://api.openai.com/v1/models";

/// OpenAI provider
pub struct OpenAIProvider {
    config: ProviderConfig,
    client: reqwest::Client,
}

impl OpenAIProvider {
    /// Create a new OpenAI provider with the given configuration
    pub fn new(config: ProviderConfig) -> Self {
        let client = build_http_client();
        Self { config, client }
    }

    /// Get the API base URL
    fn base_url(&self) -> &str {
        self.config.base_url.as_deref().unwrap_or(OPENAI_API_URL)
    }

    /// Build the request body for the API
    fn build_request_body(&self, prompt: &str, opts: &InvokeOptions) -> serde_json::Value {
        let mut body = serde_json::json!({
            "model": self.config.model,
            "max_tokens": self.config.max_tokens,
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
            body["response_format"] = serde_json::json!({ "type": "json_object" });
        }

        body
    }
}

#[async_trait]
impl LlmProvider for OpenAIProvider {
    fn name(&self) -> &'static str {
        "openai"
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    fn supports_json_mode(&self) -> bool {
        true
    }

    async fn invoke(&self, prompt: &str, opts: &InvokeOptions) -> ProviderResult<String> {
        let api_key = self
            .config
            .api_key
            .as_ref()
            .ok_or_else(|| missing_api_key_error("openai"))?;

        let body = self.build_request_body(prompt, opts);

        let url = self.base_url();
        tracing::debug!("OpenAI invoke POST {} model={}", url, self.config.model);

        let response = self
            .client
            .post(url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| request_error(&e))?;

        let status = response.status().as_u16();
        let body_text = response.text().await.map_err(|e| request_error(&e))?;

        if status != 200 {
            tracing::warn!("OpenAI API error: HTTP {} from {}: {}", status, url, body_text);
            return Err(classify_http_status(status, &body_text, "openai"));
        }

        let parsed: ChatCompletionResponse =
            serde_json::from_str(&body_text).map_err(|e| ProviderError::InvalidResponse {
                message: format!("openai returned an unexpected envelope: {}", e),
            })?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| ProviderError::InvalidResponse {
                message: "openai response carried no message content".to_string(),
            })?;

        Ok(strip_json_markers(&content))
    }

    async fn health_check(&self) -> ProviderResult<()> {
        let api_key = self
            .config
            .api_key
            .as_ref()
            .ok_or_else(|| missing_api_key_error("openai"))?;

        tracing::debug!("OpenAI health check GET {}", OPENAI_MODELS_URL);

        let response = self
            .client
            .get(OPENAI_MODELS_URL)
            .header("Authorization", format!("Bearer {}", api_key))
            .send()
            .await
            .map_err(|e| request_error(&e))?;

        let status = response.status().as_u16();
        if status == 200 {
            Ok(())
        } else {
            tracing::warn!("OpenAI health check failed: HTTP {}", status);
            let body = response.text().await.unwrap_or_default();
            Err(classify_http_status(status, &body, "openai"))
        }
    }

    fn config(&self) -> &ProviderConfig {
        &self.config
    }
}

/// OpenAI API response format
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}
