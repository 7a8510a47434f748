//! HTTP client for a local Ollama server.

use crate::ollama::conversions;
use async_trait::async_trait;
use parley_core::{GenerationRequest, GenerationResult};
use parley_error::{BackendError, BackendErrorKind};
use parley_interface::InferenceBackend;
use reqwest::Client;
use tracing::{debug, error, instrument};

/// Where Ollama listens by default.
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";

/// Client for Ollama's non-streaming generate endpoint.
///
/// Holds one connection pool for its lifetime. No timeout is configured
/// beyond the transport default and failed calls are never retried.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: Client,
    model: String,
    base_url: String,
}

impl OllamaClient {
    /// Creates a client for `model` on the default local Ollama server.
    pub fn new(model: impl Into<String>) -> Self {
        Self::new_with_url(model, DEFAULT_OLLAMA_URL)
    }

    /// Creates a client for `model` on the Ollama server at `base_url`.
    #[instrument(skip_all)]
    pub fn new_with_url(model: impl Into<String>, base_url: impl Into<String>) -> Self {
        let model = model.into();
        let base_url = base_url.into().trim_end_matches('/').to_string();

        debug!(model = %model, url = %base_url, "Created Ollama client");

        Self {
            client: Client::new(),
            model,
            base_url,
        }
    }

    /// Base URL of the Ollama server.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the generate endpoint.
    pub fn generate_url(&self) -> String {
        format!("{}/api/generate", self.base_url)
    }
}

#[async_trait]
impl InferenceBackend for OllamaClient {
    #[instrument(skip(self, req), fields(provider = "ollama", model = %self.model))]
    async fn generate(&self, req: &GenerationRequest) -> Result<GenerationResult, BackendError> {
        let body = conversions::to_generate_request(req, &self.model)?;

        debug!(
            prompt_len = req.prompt().len(),
            temperature = ?req.temperature(),
            max_tokens = ?req.max_tokens(),
            top_p = ?req.top_p(),
            "Sending request"
        );

        let response = self
            .client
            .post(self.generate_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                BackendError::new(BackendErrorKind::Transport(format!("Request failed: {}", e)))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(status = %status, error = %error_text, "Ollama API error");

            return Err(BackendError::new(BackendErrorKind::Status {
                status: status.as_u16(),
                body: error_text,
            }));
        }

        let text = response.text().await.map_err(|e| {
            error!(error = ?e, "Failed to read response body");
            BackendError::new(BackendErrorKind::Transport(format!(
                "Failed to read response body: {}",
                e
            )))
        })?;

        let result = conversions::from_generate_response(&text).inspect_err(|e| {
            error!(error = %e, "Failed to parse response");
        })?;

        debug!(response_len = result.text().len(), "Received response");
        Ok(result)
    }

    fn provider_name(&self) -> &'static str {
        "ollama"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_url() {
        let client = OllamaClient::new("llama3");
        assert_eq!(client.generate_url(), "http://localhost:11434/api/generate");
        assert_eq!(client.model_name(), "llama3");
        assert_eq!(client.provider_name(), "ollama");
    }

    #[test]
    fn test_trailing_slash_is_dropped() {
        let client = OllamaClient::new_with_url("llama3", "http://10.0.0.5:11434/");
        assert_eq!(client.generate_url(), "http://10.0.0.5:11434/api/generate");
    }
}
