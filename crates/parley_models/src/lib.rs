//! Inference backend integrations for Parley.
//!
//! Each backend implements [`parley_interface::InferenceBackend`]. The only
//! backend today is a local Ollama server.

mod ollama;

pub use ollama::{
    DEFAULT_OLLAMA_URL, OllamaClient, OllamaGenerateRequest, OllamaGenerateRequestBuilder,
    OllamaGenerateResponse,
};
