//! Task kinds, their request records, and result envelopes.

use crate::{
    ConversationHistory, ConversationTurn, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE,
    DEFAULT_TOP_P, GenerationParameters, GenerationRequest, GenerationResult, parse_body,
    template,
};
use parley_error::ValidationError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Every operation that goes through the gateway's backend call path.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TaskKind {
    /// Prompt forwarded unchanged
    Chat,
    /// Prompt forwarded unchanged with explicit sampling parameters
    Generate,
    /// Summarize a text
    Summarize,
    /// Classify the sentiment of a text
    Classify,
    /// Answer a question about a context
    #[serde(rename = "qa")]
    #[strum(serialize = "qa")]
    QuestionAnswer,
    /// Chat that replays the caller's conversation history
    ChatWithMemory,
    /// Translate a text into a target language
    Translate,
    /// Simulated speech synthesis
    TextToSpeech,
}

impl TaskKind {
    /// HTTP route serving this task.
    pub fn path(self) -> &'static str {
        match self {
            Self::Chat => "/chat/",
            Self::Generate => "/generate/",
            Self::Summarize => "/summarize/",
            Self::Classify => "/classify/",
            Self::QuestionAnswer => "/qa/",
            Self::ChatWithMemory => "/chat_with_memory/",
            Self::Translate => "/translate/",
            Self::TextToSpeech => "/text_to_speech/",
        }
    }

    /// Name of the single field in this task's result envelope.
    pub fn envelope_field(self) -> &'static str {
        match self {
            Self::Chat | Self::Generate => "response",
            Self::Summarize => "summary",
            Self::Classify => "classification",
            Self::QuestionAnswer => "answer",
            Self::ChatWithMemory => "conversation_history",
            Self::Translate => "translation",
            Self::TextToSpeech => "audio_file",
        }
    }
}

/// Request body carrying only a prompt (chat, text-to-speech).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PromptQuery {
    /// Prompt text
    pub prompt: String,
}

impl PromptQuery {
    /// Creates a prompt query.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

/// Request body for the `generate` task.
///
/// Omitted parameters take their defaults; an explicit `null` is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateQuery {
    /// Prompt text
    pub prompt: String,
    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Top-p sampling parameter
    #[serde(default = "default_top_p")]
    pub top_p: f64,
}

impl GenerateQuery {
    /// Creates a query with default parameters.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            top_p: DEFAULT_TOP_P,
        }
    }

    /// The sampling parameters to forward.
    pub fn parameters(&self) -> GenerationParameters {
        GenerationParameters::new(self.temperature, self.max_tokens, self.top_p)
    }
}

fn default_temperature() -> f64 {
    DEFAULT_TEMPERATURE
}

fn default_max_tokens() -> u32 {
    DEFAULT_MAX_TOKENS
}

fn default_top_p() -> f64 {
    DEFAULT_TOP_P
}

/// Request body carrying a text to transform (summarize, classify).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextQuery {
    /// Input text
    pub text: String,
}

impl TextQuery {
    /// Creates a text query.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Request body for question answering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuestionQuery {
    /// Text the answer must be based on
    pub context: String,
    /// The question
    pub question: String,
}

/// Request body for translation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TranslationQuery {
    /// Text to translate
    pub text: String,
    /// Language to translate into, as free text
    pub target_language: String,
}

/// Request body for chat with memory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChatMemoryQuery {
    /// New user prompt
    pub prompt: String,
    /// Every earlier turn, oldest first
    #[serde(default)]
    pub conversation_history: ConversationHistory,
}

/// A validated request for one task.
#[derive(Debug, Clone, PartialEq)]
pub enum Task {
    Chat(PromptQuery),
    Generate(GenerateQuery),
    Summarize(TextQuery),
    Classify(TextQuery),
    QuestionAnswer(QuestionQuery),
    ChatWithMemory(ChatMemoryQuery),
    Translate(TranslationQuery),
    TextToSpeech(PromptQuery),
}

impl Task {
    /// Validates a JSON request body against the fields `kind` requires.
    ///
    /// Fails on the first missing or mistyped field; unknown fields are
    /// ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use parley_core::{Task, TaskKind};
    /// use serde_json::json;
    ///
    /// let err = Task::from_fields(TaskKind::QuestionAnswer, json!({ "context": "c" })).unwrap_err();
    /// assert_eq!(err.field(), Some("question"));
    /// ```
    pub fn from_fields(kind: TaskKind, body: serde_json::Value) -> Result<Self, ValidationError> {
        let task = match kind {
            TaskKind::Chat => Self::Chat(parse_body(body)?),
            TaskKind::Generate => Self::Generate(parse_body(body)?),
            TaskKind::Summarize => Self::Summarize(parse_body(body)?),
            TaskKind::Classify => Self::Classify(parse_body(body)?),
            TaskKind::QuestionAnswer => Self::QuestionAnswer(parse_body(body)?),
            TaskKind::ChatWithMemory => Self::ChatWithMemory(parse_body(body)?),
            TaskKind::Translate => Self::Translate(parse_body(body)?),
            TaskKind::TextToSpeech => Self::TextToSpeech(parse_body(body)?),
        };
        debug!(task = %kind, "Request fields validated");
        Ok(task)
    }

    /// The kind of this task.
    pub fn kind(&self) -> TaskKind {
        match self {
            Self::Chat(_) => TaskKind::Chat,
            Self::Generate(_) => TaskKind::Generate,
            Self::Summarize(_) => TaskKind::Summarize,
            Self::Classify(_) => TaskKind::Classify,
            Self::QuestionAnswer(_) => TaskKind::QuestionAnswer,
            Self::ChatWithMemory(_) => TaskKind::ChatWithMemory,
            Self::Translate(_) => TaskKind::Translate,
            Self::TextToSpeech(_) => TaskKind::TextToSpeech,
        }
    }

    /// Renders the prompt and splits the task into the backend request and
    /// whatever is needed to shape the backend's answer afterwards.
    ///
    /// For chat with memory this is where the new user turn joins the history.
    pub fn into_call(self) -> PendingCall {
        let kind = self.kind();
        let prompt = template::render(&self);
        match self {
            Self::Generate(query) => PendingCall {
                kind,
                request: GenerationRequest::new(prompt).with_parameters(query.parameters()),
                history: None,
            },
            Self::ChatWithMemory(query) => {
                let mut history = query.conversation_history;
                history.push(ConversationTurn::user(query.prompt));
                PendingCall {
                    kind,
                    request: GenerationRequest::new(prompt),
                    history: Some(history),
                }
            }
            _ => PendingCall {
                kind,
                request: GenerationRequest::new(prompt),
                history: None,
            },
        }
    }
}

/// A task whose prompt has been rendered and whose backend call is pending.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingCall {
    kind: TaskKind,
    request: GenerationRequest,
    history: Option<ConversationHistory>,
}

impl PendingCall {
    /// The kind of the originating task.
    pub fn kind(&self) -> TaskKind {
        self.kind
    }

    /// The request to send to the backend.
    pub fn request(&self) -> &GenerationRequest {
        &self.request
    }

    /// Shapes the backend's answer into this task's envelope.
    pub fn complete(self, result: GenerationResult) -> TaskOutput {
        let text = result.trimmed().to_string();
        match self.kind {
            TaskKind::Chat | TaskKind::Generate => TaskOutput::Response(text),
            TaskKind::Summarize => TaskOutput::Summary(text),
            TaskKind::Classify => TaskOutput::Classification(text),
            TaskKind::QuestionAnswer => TaskOutput::Answer(text),
            TaskKind::Translate => TaskOutput::Translation(text),
            TaskKind::TextToSpeech => {
                TaskOutput::AudioFile(format!("Simulated audio for: {}", text))
            }
            TaskKind::ChatWithMemory => {
                let mut history = self.history.unwrap_or_default();
                history.push(ConversationTurn::assistant(text));
                TaskOutput::ConversationHistory(history)
            }
        }
    }
}

/// Result envelope: a JSON object with exactly one task-specific key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskOutput {
    Response(String),
    Summary(String),
    Classification(String),
    Answer(String),
    Translation(String),
    AudioFile(String),
    ConversationHistory(ConversationHistory),
}

impl TaskOutput {
    /// The text of a single-string envelope.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Response(text)
            | Self::Summary(text)
            | Self::Classification(text)
            | Self::Answer(text)
            | Self::Translation(text)
            | Self::AudioFile(text) => Some(text),
            Self::ConversationHistory(_) => None,
        }
    }

    /// The history of a chat-with-memory envelope.
    pub fn history(&self) -> Option<&ConversationHistory> {
        match self {
            Self::ConversationHistory(history) => Some(history),
            _ => None,
        }
    }
}
