//! Core data types for the Parley prompt gateway.
//!
//! This crate holds everything about a task that can be decided without
//! talking to a backend: request shapes, field validation, prompt templates,
//! conversation history, result envelopes, and the two offline operations
//! (model info and token counting).

mod body;
mod conversation;
mod generation;
mod model_info;
mod observability;
mod task;
pub mod template;
mod token_count;

pub use conversation::{ConversationHistory, ConversationTurn, Speaker};
pub use body::parse_body;
pub use generation::{
    DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE, DEFAULT_TOP_P, GenerationParameters,
    GenerationRequest, GenerationRequestBuilder, GenerationResult,
};
pub use model_info::{DEFAULT_MODEL, MODEL_VERSION, ModelInfo, ModelParameters};
pub use observability::{
    ENV_METRICS_EXPORTER, ENV_OTLP_ENDPOINT, MetricsExporter, init_observability,
    shutdown_observability,
};
pub use task::{
    ChatMemoryQuery, GenerateQuery, PendingCall, PromptQuery, QuestionQuery, Task, TaskKind,
    TaskOutput, TextQuery, TranslationQuery,
};
pub use token_count::{TokenCount, TokenCountQuery, token_count};
