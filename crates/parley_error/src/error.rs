//! Crate-level error wrapper.

use crate::{BackendError, ConfigError, ValidationError};

/// Crate-level error variants.
#[derive(Debug, Clone, derive_more::From, derive_more::Display)]
pub enum ParleyErrorKind {
    /// Request rejected before reaching the backend
    #[display("{}", _0)]
    Validation(ValidationError),
    /// Inference call failed
    #[display("{}", _0)]
    Backend(BackendError),
    /// Invalid startup configuration
    #[display("{}", _0)]
    Config(ConfigError),
}

/// Parley error with kind discrimination.
#[derive(Debug, Clone, derive_more::Display)]
#[display("Parley Error: {}", _0)]
pub struct ParleyError(Box<ParleyErrorKind>);

impl ParleyError {
    /// Create a new error from a kind.
    pub fn new(kind: ParleyErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ParleyErrorKind {
        &self.0
    }

    /// Returns true if the request was rejected before any backend call.
    pub fn is_validation(&self) -> bool {
        matches!(*self.0, ParleyErrorKind::Validation(_))
    }

    /// Returns true if the inference call itself failed.
    pub fn is_backend(&self) -> bool {
        matches!(*self.0, ParleyErrorKind::Backend(_))
    }
}

impl std::error::Error for ParleyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ParleyErrorKind::Validation(e) => Some(e),
            ParleyErrorKind::Backend(e) => Some(e),
            ParleyErrorKind::Config(e) => Some(e),
        }
    }
}

// Generic From implementation for any type that converts to ParleyErrorKind
impl<T> From<T> for ParleyError
where
    T: Into<ParleyErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Parley operations.
pub type ParleyResult<T> = std::result::Result<T, ParleyError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BackendErrorKind;

    #[test]
    fn test_validation_converts_into_parley_error() {
        let err: ParleyError = ValidationError::missing_field("text").into();
        assert!(err.is_validation());
        assert!(!err.is_backend());
        assert!(err.to_string().contains("missing field `text`"));
    }

    #[test]
    fn test_backend_converts_into_parley_error() {
        let err: ParleyError =
            BackendError::new(BackendErrorKind::Transport("connection refused".into())).into();
        assert!(err.is_backend());
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_error_records_caller_location() {
        let err = ConfigError::new("bad port");
        assert!(err.file.ends_with("error.rs"));
        assert!(err.line > 0);
    }
}
