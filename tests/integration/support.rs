//! Shared test doubles for the integration scenarios.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use intervue::{InvokeOptions, LlmProvider, ProviderConfig, ProviderError, ProviderResult};

/// Provider that replays queued responses, records prompts, and counts
/// invocations. Once the queue is empty every call fails with a
/// transport error.
pub struct ScriptedProvider {
    name: &'static str,
    responses: Mutex<Vec<ProviderResult<String>>>,
    prompts: Mutex<Vec<String>>,
    calls: AtomicUsize,
    delay: Option<Duration>,
    config: ProviderConfig,
}

impl ScriptedProvider {
    pub fn new(name: &'static str, responses: Vec<ProviderResult<String>>) -> Arc<Self> {
        Arc::new(Self {
            name,
            responses: Mutex::new(responses),
            prompts: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
            delay: None,
            config: ProviderConfig::default(),
        })
    }

    /// Provider whose every call fails
    pub fn failing(name: &'static str) -> Arc<Self> {
        Self::new(name, vec![])
    }

    /// Provider that answers `{}` after `delay_ms`
    pub fn slow(name: &'static str, delay_ms: u64) -> Arc<Self> {
        Arc::new(Self {
            name,
            responses: Mutex::new(vec![Ok("{}".to_string())]),
            prompts: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
            delay: Some(Duration::from_millis(delay_ms)),
            config: ProviderConfig::default(),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    fn model(&self) -> &str {
        "test-model"
    }

    async fn invoke(&self, prompt: &str, _opts: &InvokeOptions) -> ProviderResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(ProviderError::Transport {
                message: "connection refused".to_string(),
            });
        }
        responses.remove(0)
    }

    async fn health_check(&self) -> ProviderResult<()> {
        Ok(())
    }

    fn config(&self) -> &ProviderConfig {
        &self.config
    }
}
