//! Inference backend error types.

/// Ways an inference call can fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum BackendErrorKind {
    /// The request never produced an HTTP response (connection refused,
    /// DNS failure, reset, transport timeout).
    #[display("Transport error: {}", _0)]
    Transport(String),

    /// The backend answered with a non-success status.
    #[display("Backend returned HTTP {}: {}", status, body)]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, as text
        body: String,
    },

    /// The backend answered successfully but the body could not be used.
    #[display("Malformed backend response: {}", _0)]
    MalformedBody(String),
}

/// The inference call failed. Never retried, never downgraded to an empty
/// result.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Backend Error: {} at line {} in {}", kind, line, file)]
pub struct BackendError {
    /// What went wrong
    pub kind: BackendErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl BackendError {
    /// Create a new BackendError with the given kind at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use parley_error::{BackendError, BackendErrorKind};
    ///
    /// let err = BackendError::new(BackendErrorKind::Status {
    ///     status: 500,
    ///     body: "boom".to_string(),
    /// });
    /// assert!(err.to_string().contains("HTTP 500"));
    /// ```
    #[track_caller]
    pub fn new(kind: BackendErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &BackendErrorKind {
        &self.kind
    }
}

impl<T> From<T> for BackendError
where
    T: Into<BackendErrorKind>,
{
    #[track_caller]
    fn from(kind: T) -> Self {
        Self::new(kind.into())
    }
}
