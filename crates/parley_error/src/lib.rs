//! Error types for the Parley prompt gateway.
//!
//! Every request that fails does so with exactly one of two caller-facing
//! kinds: [`ValidationError`] (rejected before any backend call) or
//! [`BackendError`] (the inference call could not complete). Startup
//! problems are reported as [`ConfigError`].

mod backend;
mod config;
mod error;
mod validation;

pub use backend::{BackendError, BackendErrorKind};
pub use config::ConfigError;
pub use error::{ParleyError, ParleyErrorKind, ParleyResult};
pub use validation::ValidationError;
