//! Trait definitions for the Parley prompt gateway.

mod backend;

pub use backend::InferenceBackend;
