//! Request body validation.
//!
//! Request records are plain serde types; this module turns a serde failure
//! into a [`ValidationError`] that names the top-level field at fault.

use parley_error::ValidationError;
use serde::de::DeserializeOwned;
use serde_json::Value;
use serde_path_to_error::Segment;

/// Deserializes a JSON request body into `T`.
///
/// Fields `T` does not declare are ignored.
///
/// # Examples
///
/// ```
/// use parley_core::{QuestionQuery, parse_body};
/// use serde_json::json;
///
/// let err = parse_body::<QuestionQuery>(json!({ "context": "c" })).unwrap_err();
/// assert_eq!(err.field(), Some("question"));
///
/// let err = parse_body::<QuestionQuery>(json!({ "context": "c", "question": 3 })).unwrap_err();
/// assert_eq!(err.field(), Some("question"));
/// ```
pub fn parse_body<T: DeserializeOwned>(body: Value) -> Result<T, ValidationError> {
    if !body.is_object() {
        return Err(ValidationError::new(format!(
            "request body must be a JSON object, got {}",
            json_type_name(&body)
        )));
    }

    serde_path_to_error::deserialize(body).map_err(|err| {
        let field = match err.path().iter().next() {
            Some(Segment::Map { key }) => Some(key.clone()),
            _ => None,
        };
        let reason = err.into_inner().to_string();

        match field {
            Some(name) => ValidationError::at_field(&name, reason),
            None => match missing_field(&reason) {
                Some(name) => ValidationError::missing_field(name),
                None => ValidationError::new(reason),
            },
        }
    })
}

/// Field name out of serde's "missing field `name`" message.
fn missing_field(reason: &str) -> Option<&str> {
    reason
        .strip_prefix("missing field `")?
        .split('`')
        .next()
        .filter(|name| !name.is_empty())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
