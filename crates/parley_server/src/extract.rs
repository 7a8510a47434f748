//! Request body extraction.

use crate::ApiError;
use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};

/// A request body parsed as arbitrary JSON.
///
/// Field checks are left to the task that receives it, so that a missing
/// field can be reported by name. A body that is not JSON at all is rejected
/// here as a validation error; a body that cannot be read keeps the status
/// axum gives it.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonBody(pub serde_json::Value);

#[async_trait]
impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(ApiError::from)?;
        let value = serde_json::from_slice(&bytes).map_err(|e| {
            ApiError::validation(format!("request body is not valid JSON: {}", e), None)
        })?;
        Ok(Self(value))
    }
}
