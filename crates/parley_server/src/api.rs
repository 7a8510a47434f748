//! HTTP API for the prompt gateway.
//!
//! One POST route per task, plus model info, token counting, and a health
//! check. Routes keep their trailing slash.

use crate::{ApiError, JsonBody, PromptGateway};
use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use parley_core::{ModelInfo, TaskKind, TaskOutput, TokenCount};
use parley_interface::InferenceBackend;
use serde_json::json;
use std::sync::Arc;
use strum::IntoEnumIterator;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::instrument;

/// API server state.
pub struct ApiState<B> {
    /// Shared gateway
    pub gateway: Arc<PromptGateway<B>>,
}

impl<B> ApiState<B> {
    /// Creates a new API state.
    pub fn new(gateway: Arc<PromptGateway<B>>) -> Self {
        Self { gateway }
    }
}

// Derived Clone would demand `B: Clone`.
impl<B> Clone for ApiState<B> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
        }
    }
}

/// Creates the API router.
pub fn create_router<B>(gateway: Arc<PromptGateway<B>>) -> Router
where
    B: InferenceBackend + 'static,
{
    let state = ApiState::new(gateway);

    let mut router = Router::new()
        .route("/health", get(health_check))
        .route("/model_info/", get(model_info::<B>))
        .route("/token_count/", post(token_count::<B>));

    for kind in TaskKind::iter() {
        router = router.route(
            kind.path(),
            post(
                move |State(state): State<ApiState<B>>, JsonBody(body): JsonBody| async move {
                    run_task(state, kind, body).await
                },
            ),
        );
    }

    // Chat history is resent in full on every turn, so bodies are unbounded.
    router
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint.
#[instrument(skip_all)]
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

async fn run_task<B: InferenceBackend>(
    state: ApiState<B>,
    kind: TaskKind,
    body: serde_json::Value,
) -> Result<Json<TaskOutput>, ApiError> {
    let output = state.gateway.execute_task(kind, body).await?;
    Ok(Json(output))
}

/// Static model descriptor. Never calls the backend.
#[instrument(skip_all)]
async fn model_info<B: InferenceBackend>(State(state): State<ApiState<B>>) -> Json<ModelInfo> {
    Json(state.gateway.model_info().clone())
}

/// Whitespace word count. Never calls the backend.
#[instrument(skip_all)]
async fn token_count<B: InferenceBackend>(
    State(state): State<ApiState<B>>,
    JsonBody(body): JsonBody,
) -> Result<Json<TokenCount>, ApiError> {
    let count = state.gateway.token_count(body)?;
    Ok(Json(count))
}
