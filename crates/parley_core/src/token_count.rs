//! Approximate token counting.

use crate::parse_body;
use parley_error::ValidationError;
use serde::{Deserialize, Serialize};

/// Counts whitespace-separated words.
///
/// This is an approximation, not a tokenizer: runs of whitespace collapse and
/// leading or trailing whitespace is ignored, but punctuation and subwords
/// are not split.
///
/// # Examples
///
/// ```
/// use parley_core::token_count;
///
/// assert_eq!(token_count("a b  c"), 3);
/// assert_eq!(token_count("   "), 0);
/// ```
pub fn token_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Request body for token counting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenCountQuery {
    /// Text to count
    pub text: String,
}

impl TokenCountQuery {
    /// Validates a JSON request body.
    pub fn from_fields(body: serde_json::Value) -> Result<Self, ValidationError> {
        parse_body(body)
    }

    /// Counts the tokens in this query.
    pub fn count(&self) -> TokenCount {
        TokenCount {
            token_count: token_count(&self.text),
        }
    }
}

/// Token count envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenCount {
    /// Number of whitespace-separated words
    pub token_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mixed_whitespace() {
        assert_eq!(token_count("one\ttwo\nthree  four "), 4);
    }

    #[test]
    fn test_punctuation_is_not_split() {
        assert_eq!(token_count("Hello, world!"), 2);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(token_count(""), 0);
    }

    #[test]
    fn test_query_requires_text() {
        let err = TokenCountQuery::from_fields(json!({ "prompt": "x" })).unwrap_err();
        assert_eq!(err.field(), Some("text"));
    }

    #[test]
    fn test_envelope_wire_format() {
        let query = TokenCountQuery::from_fields(json!({ "text": "a b  c" })).unwrap();
        assert_eq!(
            serde_json::to_value(query.count()).unwrap(),
            json!({ "token_count": 3 })
        );
    }
}
