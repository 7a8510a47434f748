//! Inference backend trait.

use async_trait::async_trait;
use parley_core::{GenerationRequest, GenerationResult};
use parley_error::BackendError;
use std::sync::Arc;

/// A text-generation service the gateway forwards prompts to.
///
/// One call to [`generate`](InferenceBackend::generate) is one request to the
/// service. Implementations must not retry, batch, or stream: a failed call
/// is reported as a [`BackendError`] and the caller sees it immediately.
#[async_trait]
pub trait InferenceBackend: Send + Sync {
    /// Sends a single prompt and waits for the complete generated text.
    async fn generate(&self, req: &GenerationRequest) -> Result<GenerationResult, BackendError>;

    /// Name of the provider (for logging).
    fn provider_name(&self) -> &'static str;

    /// Model the backend is asked to run.
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<B> InferenceBackend for Arc<B>
where
    B: InferenceBackend + ?Sized,
{
    async fn generate(&self, req: &GenerationRequest) -> Result<GenerationResult, BackendError> {
        (**self).generate(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}
