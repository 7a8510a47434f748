//! Test utilities for gateway tests.
//!
//! Provides a mock inference backend that records every request it sees.

#![allow(dead_code)]

use async_trait::async_trait;
use parley_core::{GenerationRequest, GenerationResult};
use parley_error::{BackendError, BackendErrorKind};
use parley_interface::InferenceBackend;
use std::sync::{Arc, Mutex};

/// How the mock answers every call.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Generated text, returned verbatim
    Text(String),
    /// Fail with this kind
    Fail(BackendErrorKind),
}

/// Mock backend for testing without a running inference server.
#[derive(Debug, Clone)]
pub struct MockBackend {
    reply: MockReply,
    requests: Arc<Mutex<Vec<GenerationRequest>>>,
}

impl MockBackend {
    /// Answers every call with `text`.
    pub fn replying(text: &str) -> Self {
        Self {
            reply: MockReply::Text(text.to_string()),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Fails every call with `kind`.
    pub fn failing(kind: BackendErrorKind) -> Self {
        Self {
            reply: MockReply::Fail(kind),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Every request received so far, oldest first.
    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of backend calls made.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Prompt of the most recent call.
    pub fn last_prompt(&self) -> Option<String> {
        self.requests
            .lock()
            .unwrap()
            .last()
            .map(|req| req.prompt().clone())
    }
}

#[async_trait]
impl InferenceBackend for MockBackend {
    async fn generate(&self, req: &GenerationRequest) -> Result<GenerationResult, BackendError> {
        self.requests.lock().unwrap().push(req.clone());
        match &self.reply {
            MockReply::Text(text) => Ok(GenerationResult::new(text.clone())),
            MockReply::Fail(kind) => Err(BackendError::new(kind.clone())),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}
