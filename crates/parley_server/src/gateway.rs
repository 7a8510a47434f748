//! The single call path shared by every task.

use derive_getters::Getters;
use parley_core::{ModelInfo, Task, TaskKind, TaskOutput, TokenCount, TokenCountQuery};
use parley_error::ParleyResult;
use parley_interface::InferenceBackend;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

#[cfg(feature = "metrics")]
use crate::GatewayMetrics;

/// Validates requests, renders prompts, calls the backend exactly once per
/// task, and shapes the answer into the task's envelope.
///
/// Holds no per-request state: chat history travels with each request.
#[derive(Debug, Getters)]
pub struct PromptGateway<B> {
    /// Inference backend
    backend: B,
    /// Static description of the configured model
    model_info: ModelInfo,
    #[cfg(feature = "metrics")]
    #[getter(skip)]
    metrics: GatewayMetrics,
}

impl<B: InferenceBackend> PromptGateway<B> {
    /// Create a gateway in front of `backend`.
    pub fn new(backend: B) -> Self {
        let model_info = ModelInfo::for_model(backend.model_name());
        Self {
            backend,
            model_info,
            #[cfg(feature = "metrics")]
            metrics: GatewayMetrics::new(),
        }
    }

    /// Validates `body` for `kind` and runs the task.
    ///
    /// # Errors
    ///
    /// Returns a validation error, without calling the backend, if a
    /// required field is missing or mistyped. Returns a backend error if the
    /// inference call fails.
    #[instrument(skip_all, fields(task = %kind))]
    pub async fn execute_task(
        &self,
        kind: TaskKind,
        body: serde_json::Value,
    ) -> ParleyResult<TaskOutput> {
        let task = Task::from_fields(kind, body).inspect_err(|e| {
            debug!(field = ?e.field(), "Rejected request");
            #[cfg(feature = "metrics")]
            self.metrics.record_failure(kind.into(), "validation");
        })?;
        self.execute(task).await
    }

    /// Runs an already validated task.
    #[instrument(skip_all, fields(task = %task.kind(), provider = self.backend.provider_name()))]
    pub async fn execute(&self, task: Task) -> ParleyResult<TaskOutput> {
        let call = task.into_call();
        debug!(prompt_len = call.request().prompt().len(), "Calling backend");

        let started = Instant::now();
        let result = self.backend.generate(call.request()).await;
        let elapsed = started.elapsed();

        match result {
            Ok(result) => {
                info!(elapsed_ms = elapsed.as_millis() as u64, "Task completed");
                #[cfg(feature = "metrics")]
                self.metrics
                    .record_success(call.kind().into(), elapsed.as_secs_f64());
                Ok(call.complete(result))
            }
            Err(e) => {
                warn!(
                    error = %e.kind,
                    elapsed_ms = elapsed.as_millis() as u64,
                    "Backend call failed"
                );
                #[cfg(feature = "metrics")]
                self.metrics.record_failure(call.kind().into(), "backend");
                Err(e.into())
            }
        }
    }

    /// Counts whitespace-separated words in the body's `text` field.
    ///
    /// Never calls the backend.
    #[instrument(skip_all)]
    pub fn token_count(&self, body: serde_json::Value) -> ParleyResult<TokenCount> {
        let query = TokenCountQuery::from_fields(body)?;
        Ok(query.count())
    }
}
