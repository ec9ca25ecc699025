use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::errors::CompletionError;
use crate::llm_providers::{GeminiProvider, TextCompletion};
use crate::log_llm_operation;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Immutable handle to the configured text-completion backend.
///
/// Built once at startup and shared by every handler. All providers go
/// through [`LLMService::complete`], which owns the input/output checks,
/// the timeout and the error classification.
#[derive(Clone)]
pub struct LLMService {
    provider: Arc<dyn TextCompletion>,
    timeout: Duration,
}

impl LLMService {
    pub fn new(provider: Arc<dyn TextCompletion>, timeout: Duration) -> Self {
        Self { provider, timeout }
    }

    pub fn new_gemini(
        api_key: String,
        base_url: Option<String>,
        model: Option<String>,
        timeout: Duration,
    ) -> Self {
        Self::new(Arc::new(GeminiProvider::new(api_key, base_url, model)), timeout)
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.provider_name()
    }

    pub fn model_name(&self) -> &str {
        self.provider.model_name()
    }

    /// Send one prompt to the model and return its text.
    pub async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        if prompt.trim().is_empty() {
            return Err(CompletionError::InvalidInput("Prompt cannot be empty".to_string()));
        }

        log_llm_operation!(
            start,
            "complete",
            provider = self.provider_name(),
            prompt_length = prompt.len()
        );
        let started = Instant::now();

        let outcome = match tokio::time::timeout(self.timeout, self.provider.generate(prompt)).await {
            Ok(result) => result,
            Err(_) => Err(CompletionError::ProviderFailure(format!(
                "request timed out after {}s",
                self.timeout.as_secs_f32()
            ))),
        };

        let text = match outcome {
            Ok(text) if text.trim().is_empty() => Err(CompletionError::EmptyResponse),
            Ok(text) => Ok(text),
            Err(e) => Err(e),
        };

        match &text {
            Ok(text) => {
                log_llm_operation!(
                    success,
                    "complete",
                    provider = self.provider_name(),
                    duration_ms = started.elapsed().as_millis() as u64,
                    response_length = text.len()
                );
            }
            Err(e) => {
                log_llm_operation!(error, "complete", provider = self.provider_name(), error = e);
            }
        }

        text
    }
}
