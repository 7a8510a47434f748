//! HTTP prompt gateway in front of a local inference server.
//!
//! [`PromptGateway`] owns the single call path every task goes through:
//! validate, render, call the backend once, shape the result. The
//! [`api`] module exposes it over HTTP.

pub mod api;
mod config;
mod error;
mod extract;
mod gateway;
#[cfg(feature = "metrics")]
mod metrics;
mod server;

pub use api::{ApiState, create_router};
pub use config::{
    DEFAULT_BACKEND_URL, DEFAULT_HOST, DEFAULT_PORT, ENV_BACKEND_URL, ENV_HOST, ENV_MODEL,
    ENV_PORT, GatewayConfig,
};
pub use error::ApiError;
pub use extract::JsonBody;
pub use gateway::PromptGateway;
#[cfg(feature = "metrics")]
pub use metrics::GatewayMetrics;
pub use server::serve;
