//! Generation request and result types.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Sampling temperature used when a caller of the `generate` task omits one.
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
/// Token limit used when a caller of the `generate` task omits one.
pub const DEFAULT_MAX_TOKENS: u32 = 100;
/// Nucleus sampling value used when a caller of the `generate` task omits one.
pub const DEFAULT_TOP_P: f64 = 0.9;

/// A single prompt bound for the inference backend.
///
/// Generation parameters left as `None` are not sent at all, so the backend
/// applies its own defaults. Streaming is not representable here: every
/// backend call is a single non-streaming request.
///
/// # Examples
///
/// ```
/// use parley_core::GenerationRequest;
///
/// let request = GenerationRequest::builder()
///     .prompt("Why is the sky blue?")
///     .temperature(0.2)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.prompt(), "Why is the sky blue?");
/// assert_eq!(*request.temperature(), Some(0.2));
/// assert_eq!(*request.max_tokens(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct GenerationRequest {
    /// Fully rendered prompt text
    prompt: String,
    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    temperature: Option<f64>,
    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    max_tokens: Option<u32>,
    /// Top-p sampling parameter
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    top_p: Option<f64>,
}

impl GenerationRequest {
    /// Creates a request that sends only the prompt.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            temperature: None,
            max_tokens: None,
            top_p: None,
        }
    }

    /// Returns a builder for constructing a GenerationRequest.
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }

    /// Attaches a full set of generation parameters.
    pub fn with_parameters(self, parameters: GenerationParameters) -> Self {
        Self {
            temperature: Some(parameters.temperature),
            max_tokens: Some(parameters.max_tokens),
            top_p: Some(parameters.top_p),
            ..self
        }
    }
}

/// Explicit sampling parameters for the `generate` task.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct GenerationParameters {
    /// Sampling temperature
    temperature: f64,
    /// Maximum tokens to generate
    max_tokens: u32,
    /// Top-p sampling parameter
    top_p: f64,
}

impl GenerationParameters {
    /// Creates a parameter set.
    pub fn new(temperature: f64, max_tokens: u32, top_p: f64) -> Self {
        Self {
            temperature,
            max_tokens,
            top_p,
        }
    }
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPERATURE, DEFAULT_MAX_TOKENS, DEFAULT_TOP_P)
    }
}

/// Text produced by the backend for one request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct GenerationResult {
    /// Generated text, exactly as the backend returned it
    text: String,
}

impl GenerationResult {
    /// Wraps backend text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The generated text without surrounding whitespace.
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }
}
