//! Tests for the Ollama client.
//!
//! Most tests run against a local stub server. Tests marked `#[ignore]`
//! require Ollama to be running locally with the default model pulled:
//!
//! ```text
//! ollama pull llama3.2:3b-instruct-q4_K_M
//! cargo test --package parley_models -- --ignored
//! ```

mod test_utils;

use axum::http::StatusCode;
use parley_core::{GenerationParameters, GenerationRequest};
use parley_error::BackendErrorKind;
use parley_interface::InferenceBackend;
use parley_models::OllamaClient;
use serde_json::json;
use test_utils::{StubOllama, StubReply, unbound_addr};

#[tokio::test]
async fn test_generate_returns_backend_text() -> anyhow::Result<()> {
    let stub = StubOllama::start(StubReply::json(
        StatusCode::OK,
        json!({ "model": "m", "response": "  Paris\n", "done": true }),
    ))
    .await?;
    let client = OllamaClient::new_with_url("m", &stub.url);

    let result = client.generate(&GenerationRequest::new("capital of France?")).await?;

    assert_eq!(result.text(), "  Paris\n");
    Ok(())
}

#[tokio::test]
async fn test_request_body_is_non_streaming() -> anyhow::Result<()> {
    let stub = StubOllama::start(StubReply::json(StatusCode::OK, json!({ "response": "ok" }))).await?;
    let client = OllamaClient::new_with_url("llama3.2:3b-instruct-q4_K_M", &stub.url);

    client.generate(&GenerationRequest::new("hello")).await?;

    let bodies = stub.bodies();
    assert_eq!(bodies.len(), 1);
    assert_eq!(
        bodies[0],
        json!({
            "model": "llama3.2:3b-instruct-q4_K_M",
            "prompt": "hello",
            "stream": false
        })
    );
    Ok(())
}

#[tokio::test]
async fn test_generation_parameters_are_forwarded() -> anyhow::Result<()> {
    let stub = StubOllama::start(StubReply::json(StatusCode::OK, json!({ "response": "ok" }))).await?;
    let client = OllamaClient::new_with_url("m", &stub.url);
    let request = GenerationRequest::new("hello").with_parameters(GenerationParameters::default());

    client.generate(&request).await?;

    let body = &stub.bodies()[0];
    assert_eq!(body["max_tokens"], 100);
    assert!((body["temperature"].as_f64().unwrap_or_default() - 0.7).abs() < 1e-6);
    assert!((body["top_p"].as_f64().unwrap_or_default() - 0.9).abs() < 1e-6);
    Ok(())
}

#[tokio::test]
async fn test_server_error_is_status_error() -> anyhow::Result<()> {
    let stub = StubOllama::start(StubReply::raw(
        StatusCode::INTERNAL_SERVER_ERROR,
        "model crashed",
    ))
    .await?;
    let client = OllamaClient::new_with_url("m", &stub.url);

    let err = client
        .generate(&GenerationRequest::new("hello"))
        .await
        .expect_err("HTTP 500 must fail");

    match err.kind() {
        BackendErrorKind::Status { status, body } => {
            assert_eq!(*status, 500);
            assert_eq!(body, "model crashed");
        }
        other => panic!("unexpected error kind: {other:?}"),
    }
    assert_eq!(stub.bodies().len(), 1, "no retry after failure");
    Ok(())
}

#[tokio::test]
async fn test_missing_response_field_is_malformed() -> anyhow::Result<()> {
    let stub = StubOllama::start(StubReply::json(StatusCode::OK, json!({ "done": true }))).await?;
    let client = OllamaClient::new_with_url("m", &stub.url);

    let err = client
        .generate(&GenerationRequest::new("hello"))
        .await
        .expect_err("a body without `response` must fail");

    assert!(matches!(err.kind(), BackendErrorKind::MalformedBody(_)));
    Ok(())
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() -> anyhow::Result<()> {
    let addr = unbound_addr().await?;
    let client = OllamaClient::new_with_url("m", format!("http://{}", addr));

    let err = client
        .generate(&GenerationRequest::new("hello"))
        .await
        .expect_err("nothing is listening");

    assert!(matches!(err.kind(), BackendErrorKind::Transport(_)));
    Ok(())
}

#[tokio::test]
#[ignore] // Requires Ollama running locally
async fn test_ollama_basic_generation() -> anyhow::Result<()> {
    let client = OllamaClient::new(parley_core::DEFAULT_MODEL);

    let result = client.generate(&GenerationRequest::new("Say hello")).await?;

    assert!(!result.trimmed().is_empty());
    println!("Response: {}", result.text());
    Ok(())
}
