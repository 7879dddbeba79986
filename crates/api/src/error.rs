//! API error type for request rejections.

use axum::response::{IntoResponse, Response};
use serde_json::Value;
use service::{ServiceError, ValidationError};
use thiserror::Error;

use crate::envelope::build_envelope;

/// A failure raised before a handler runs, rendered through the same envelope
/// as every handler outcome.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub ServiceError);

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self(ServiceError::Validation(e))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self.0, "request rejected");
        build_envelope::<Value>(Err(self.0))
    }
}
