//! Client for the Ollama `/api/generate` endpoint.

mod client;
mod conversions;
mod dto;

pub use client::{DEFAULT_OLLAMA_URL, OllamaClient};
pub use dto::{OllamaGenerateRequest, OllamaGenerateRequestBuilder, OllamaGenerateResponse};
