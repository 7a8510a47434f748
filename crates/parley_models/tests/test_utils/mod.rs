//! Test utilities for backend client tests.
//!
//! Provides a throwaway HTTP server standing in for Ollama.

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// What the stub answers to every `POST /api/generate`.
#[derive(Debug, Clone)]
pub struct StubReply {
    pub status: StatusCode,
    pub body: String,
}

impl StubReply {
    pub fn json(status: StatusCode, body: Value) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }

    pub fn raw(status: StatusCode, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }
}

#[derive(Clone)]
struct StubState {
    reply: StubReply,
    received: Arc<Mutex<Vec<Value>>>,
}

/// A running stub server and the request bodies it has received.
pub struct StubOllama {
    pub url: String,
    pub received: Arc<Mutex<Vec<Value>>>,
}

impl StubOllama {
    /// Starts the stub on an ephemeral local port.
    pub async fn start(reply: StubReply) -> anyhow::Result<Self> {
        let received = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            reply,
            received: Arc::clone(&received),
        };
        let app = Router::new()
            .route("/api/generate", post(generate))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self {
            url: format!("http://{}", addr),
            received,
        })
    }

    /// Request bodies received so far.
    pub fn bodies(&self) -> Vec<Value> {
        self.received.lock().expect("stub lock poisoned").clone()
    }
}

async fn generate(State(state): State<StubState>, Json(body): Json<Value>) -> (StatusCode, String) {
    state.received.lock().expect("stub lock poisoned").push(body);
    (state.reply.status, state.reply.body.clone())
}

/// An address nothing is listening on.
pub async fn unbound_addr() -> anyhow::Result<SocketAddr> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(addr)
}
