//! HTTP error responses.

use axum::{
    Json,
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use parley_error::{BackendError, ConfigError, ParleyError, ParleyErrorKind, ValidationError};
use serde_json::json;

/// An error rendered as `{"error": {"type", "message", "field"?}}`.
///
/// Validation failures are 422 and never reach the backend; backend
/// failures are 500.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status code
    pub status: StatusCode,
    /// Machine-readable error category
    pub kind: &'static str,
    /// Human-readable description
    pub message: String,
    /// Offending request field, for validation errors
    pub field: Option<String>,
}

impl ApiError {
    /// The request body was rejected before any backend call.
    pub fn validation(message: impl Into<String>, field: Option<String>) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            kind: "validation_error",
            message: message.into(),
            field,
        }
    }

    /// The backend call failed.
    pub fn backend(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            kind: "backend_error",
            message: message.into(),
            field: None,
        }
    }

    /// Anything else that went wrong on the server side.
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            kind: "server_error",
            message: message.into(),
            field: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut error = json!({
            "type": self.kind,
            "message": self.message,
        });
        if let Some(field) = self.field {
            error["field"] = json!(field);
        }
        (self.status, Json(json!({ "error": error }))).into_response()
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        let status = rejection.status();
        Self {
            status,
            kind: match status {
                StatusCode::PAYLOAD_TOO_LARGE => "payload_too_large",
                _ => "invalid_request_error",
            },
            message: rejection.body_text(),
            field: None,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::validation(err.message, err.field)
    }
}

impl From<BackendError> for ApiError {
    fn from(err: BackendError) -> Self {
        Self::backend(err.kind.to_string())
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        Self::internal(err.message)
    }
}

impl From<ParleyError> for ApiError {
    fn from(err: ParleyError) -> Self {
        match err.kind().clone() {
            ParleyErrorKind::Validation(e) => e.into(),
            ParleyErrorKind::Backend(e) => e.into(),
            ParleyErrorKind::Config(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parley_error::BackendErrorKind;

    #[test]
    fn test_validation_maps_to_422_with_field() {
        let err: ApiError = ValidationError::missing_field("text").into();
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.kind, "validation_error");
        assert_eq!(err.field.as_deref(), Some("text"));
        assert_eq!(err.message, "missing field `text`");
    }

    #[test]
    fn test_backend_maps_to_500() {
        let err: ParleyError = BackendError::new(BackendErrorKind::Status {
            status: 503,
            body: "loading".to_string(),
        })
        .into();
        let err = ApiError::from(err);
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.kind, "backend_error");
        assert!(err.message.contains("HTTP 503"));
        assert!(err.field.is_none());
    }
}
