//! Type conversions between Parley and Ollama formats.

use crate::ollama::{OllamaGenerateRequest, OllamaGenerateResponse};
use parley_core::{GenerationRequest, GenerationResult};
use parley_error::{BackendError, BackendErrorKind};

/// Converts a Parley GenerationRequest to the Ollama wire body.
pub fn to_generate_request(
    req: &GenerationRequest,
    model: &str,
) -> Result<OllamaGenerateRequest, BackendError> {
    OllamaGenerateRequest::builder()
        .model(model)
        .prompt(req.prompt().as_str())
        .stream(false)
        .temperature(*req.temperature())
        .max_tokens(*req.max_tokens())
        .top_p(*req.top_p())
        .build()
        .map_err(|e| {
            BackendError::new(BackendErrorKind::MalformedBody(format!(
                "Failed to build request: {}",
                e
            )))
        })
}

/// Parses a successful response body into a GenerationResult.
pub fn from_generate_response(body: &str) -> Result<GenerationResult, BackendError> {
    let response: OllamaGenerateResponse = serde_json::from_str(body).map_err(|e| {
        BackendError::new(BackendErrorKind::MalformedBody(format!(
            "Failed to parse JSON: {}",
            e
        )))
    })?;
    Ok(GenerationResult::new(response.response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use parley_core::GenerationParameters;
    use serde_json::json;

    #[test]
    fn test_plain_request_body() {
        let body = to_generate_request(&GenerationRequest::new("hi"), "llama3").unwrap();
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "model": "llama3", "prompt": "hi", "stream": false })
        );
    }

    #[test]
    fn test_request_body_with_parameters() {
        let req =
            GenerationRequest::new("hi").with_parameters(GenerationParameters::new(0.5, 20, 0.75));
        let body = serde_json::to_value(to_generate_request(&req, "llama3").unwrap()).unwrap();
        assert_eq!(body["stream"], false);
        assert_eq!(body["temperature"], 0.5);
        assert_eq!(body["max_tokens"], 20);
        assert_eq!(body["top_p"], 0.75);
    }

    #[test]
    fn test_request_body_keeps_caller_floats() {
        let req = GenerationRequest::new("p")
            .with_parameters(GenerationParameters::new(1e39, 100, 0.123456789));
        let body = serde_json::to_value(to_generate_request(&req, "llama3").unwrap()).unwrap();
        assert_eq!(body["temperature"].as_f64(), Some(1e39));
        assert_eq!(body["top_p"].as_f64(), Some(0.123456789));
    }

    #[test]
    fn test_response_text_is_not_trimmed_here() {
        let result = from_generate_response(r#"{"model":"llama3","response":" hi \n","done":true}"#)
            .unwrap();
        assert_eq!(result.text(), " hi \n");
    }

    #[test]
    fn test_missing_response_field_is_malformed() {
        let err = from_generate_response(r#"{"done":true}"#).unwrap_err();
        assert!(matches!(err.kind(), BackendErrorKind::MalformedBody(_)));
    }

    #[test]
    fn test_non_json_is_malformed() {
        let err = from_generate_response("<html>").unwrap_err();
        assert!(matches!(err.kind(), BackendErrorKind::MalformedBody(_)));
    }
}
