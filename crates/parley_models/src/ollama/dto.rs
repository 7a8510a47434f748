//! Data transfer objects for the Ollama generate API.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/generate`.
#[derive(Debug, Clone, PartialEq, Serialize, Builder, Getters)]
#[builder(setter(into))]
pub struct OllamaGenerateRequest {
    /// Model identifier
    model: String,
    /// Rendered prompt
    prompt: String,
    /// Always false; responses are read as a single JSON document
    #[builder(default)]
    stream: bool,
    /// Sampling temperature
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
    /// Maximum tokens to generate
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    /// Top-p sampling parameter
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f64>,
}

impl OllamaGenerateRequest {
    /// Creates a new builder for OllamaGenerateRequest.
    pub fn builder() -> OllamaGenerateRequestBuilder {
        OllamaGenerateRequestBuilder::default()
    }
}

/// Successful response of `POST /api/generate` with streaming disabled.
///
/// Ollama sends many more fields (timings, context tokens); only the
/// generated text is required.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OllamaGenerateResponse {
    /// Generated text
    pub response: String,
    /// Model that produced the text
    #[serde(default)]
    pub model: Option<String>,
    /// Whether generation finished
    #[serde(default)]
    pub done: Option<bool>,
}
