//! Request validation error types.

/// A structured request was missing a required field or carried a value of
/// the wrong type.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", message, line, file)]
pub struct ValidationError {
    /// Human-readable description of the problem
    pub message: String,
    /// Name of the offending field, when one can be identified
    pub field: Option<String>,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new ValidationError that is not tied to a single field.
    ///
    /// # Examples
    ///
    /// ```
    /// use parley_error::ValidationError;
    ///
    /// let err = ValidationError::new("request body must be a JSON object");
    /// assert!(err.field.is_none());
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            field: None,
            line: location.line(),
            file: location.file(),
        }
    }

    /// A required field is absent from the request.
    ///
    /// # Examples
    ///
    /// ```
    /// use parley_error::ValidationError;
    ///
    /// let err = ValidationError::missing_field("question");
    /// assert_eq!(err.field.as_deref(), Some("question"));
    /// assert!(err.message.contains("missing field `question`"));
    /// ```
    #[track_caller]
    pub fn missing_field(name: &str) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: format!("missing field `{}`", name),
            field: Some(name.to_string()),
            line: location.line(),
            file: location.file(),
        }
    }

    /// A field is present but its value was rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use parley_error::ValidationError;
    ///
    /// let err = ValidationError::at_field("temperature", "invalid type: string \"hot\", expected f64");
    /// assert_eq!(err.field(), Some("temperature"));
    /// assert!(err.message.starts_with("temperature: "));
    /// ```
    #[track_caller]
    pub fn at_field(name: &str, reason: impl std::fmt::Display) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: format!("{}: {}", name, reason),
            field: Some(name.to_string()),
            line: location.line(),
            file: location.file(),
        }
    }

    /// Name of the offending field, if known.
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }
}
