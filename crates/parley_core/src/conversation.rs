//! Conversation history owned and resent by the caller.

use serde::{Deserialize, Serialize};

/// Who produced a conversation turn.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Speaker {
    User,
    Assistant,
}

/// One turn of dialogue.
///
/// On the wire a turn is a single-key object naming its speaker:
/// `{"user": "hi"}` or `{"assistant": "hello"}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversationTurn {
    /// Text sent by the caller
    User(String),
    /// Text produced by the backend
    Assistant(String),
}

impl ConversationTurn {
    /// Creates a user turn.
    pub fn user(text: impl Into<String>) -> Self {
        Self::User(text.into())
    }

    /// Creates an assistant turn.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self::Assistant(text.into())
    }

    /// Who produced this turn.
    pub fn speaker(&self) -> Speaker {
        match self {
            Self::User(_) => Speaker::User,
            Self::Assistant(_) => Speaker::Assistant,
        }
    }

    /// The text of this turn.
    pub fn text(&self) -> &str {
        match self {
            Self::User(text) | Self::Assistant(text) => text,
        }
    }
}

/// Ordered dialogue turns, oldest first.
///
/// The gateway keeps no copy of a history between calls. Callers send the
/// whole history with every request and receive it back extended by exactly
/// two turns.
///
/// # Examples
///
/// ```
/// use parley_core::{ConversationHistory, ConversationTurn};
///
/// let mut history = ConversationHistory::new();
/// history.push(ConversationTurn::user("hi"));
/// history.push(ConversationTurn::assistant("hello"));
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.joined(), "hi\nhello");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationHistory(Vec<ConversationTurn>);

impl ConversationHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a turn at the end.
    pub fn push(&mut self, turn: ConversationTurn) {
        self.0.push(turn);
    }

    /// The turns in dialogue order.
    pub fn turns(&self) -> &[ConversationTurn] {
        &self.0
    }

    /// Number of turns.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if no turn has been recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Texts of all turns, one per line, in dialogue order.
    pub fn joined(&self) -> String {
        self.0
            .iter()
            .map(ConversationTurn::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Consumes the history, returning the underlying turns.
    pub fn into_turns(self) -> Vec<ConversationTurn> {
        self.0
    }
}

impl From<Vec<ConversationTurn>> for ConversationHistory {
    fn from(turns: Vec<ConversationTurn>) -> Self {
        Self(turns)
    }
}

impl FromIterator<ConversationTurn> for ConversationHistory {
    fn from_iter<I: IntoIterator<Item = ConversationTurn>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
