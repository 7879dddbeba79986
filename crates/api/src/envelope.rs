//! The uniform response envelope.
//!
//! Every endpoint answers with the same JSON shape:
//!
//! ```json
//! { "success": true, "status_code": 200, "message": "...", "data": {}, "error": {} }
//! ```
//!
//! Handlers turn their outcome into a response with [`build_envelope`].

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use service::ServiceError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T = Value> {
    pub success: bool,
    pub status_code: u16,
    pub message: String,
    pub data: T,
    pub error: Value,
}

impl Envelope {
    /// A failed envelope with the raw error description in `error`.
    pub fn failure(status: StatusCode, message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            status_code: status.as_u16(),
            message: message.into(),
            data: empty(),
            error: Value::String(error.into()),
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// A successful outcome waiting to be enveloped.
#[derive(Debug)]
pub struct Reply<T> {
    status: StatusCode,
    message: &'static str,
    data: T,
}

impl<T> Reply<T> {
    /// 200 OK.
    pub fn ok(message: &'static str, data: T) -> Self {
        Self { status: StatusCode::OK, message, data }
    }

    /// 201 Created.
    pub fn created(message: &'static str, data: T) -> Self {
        Self { status: StatusCode::CREATED, message, data }
    }
}

impl Reply<Value> {
    /// 200 OK with nothing to return.
    pub fn empty(message: &'static str) -> Self {
        Self::ok(message, empty())
    }
}

/// Wrap a service outcome, success or failure, into the response envelope.
pub fn build_envelope<T: Serialize>(outcome: Result<Reply<T>, ServiceError>) -> Response {
    match outcome {
        Ok(reply) => Envelope {
            success: true,
            status_code: reply.status.as_u16(),
            message: reply.message.to_owned(),
            data: reply.data,
            error: empty(),
        }
        .into_response(),
        Err(err) => Envelope::failure(status_for(&err), err.message(), err.to_string()).into_response(),
    }
}

/// HTTP status for each service failure.
pub fn status_for(err: &ServiceError) -> StatusCode {
    match err {
        ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
        ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        ServiceError::Persistence(_) | ServiceError::Unhandled(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn empty() -> Value {
    Value::Object(Map::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::json;
    use service::ValidationError;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn success_envelope_shape() {
        let response = build_envelope(Ok(Reply::created("Blog created successfully", json!({"id": 1}))));
        assert_eq!(response.status(), StatusCode::CREATED);

        assert_eq!(
            body_json(response).await,
            json!({
                "success": true,
                "status_code": 201,
                "message": "Blog created successfully",
                "data": {"id": 1},
                "error": {}
            })
        );
    }

    #[tokio::test]
    async fn not_found_is_404_with_detail() {
        let response = build_envelope::<Value>(Err(ServiceError::NotFound(9)));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["status_code"], json!(404));
        assert_eq!(body["message"], json!("Blog not found"));
        assert_eq!(body["data"], json!({}));
        assert_eq!(body["error"], json!("blog 9 not found"));
    }

    #[tokio::test]
    async fn validation_is_400() {
        let err = ServiceError::Validation(ValidationError::OutOfRange {
            field: "page_size",
            reason: "must be at least 1",
        });
        let response = build_envelope::<Value>(Err(err));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unhandled_is_500() {
        let response = build_envelope::<Value>(Err(ServiceError::Unhandled("boom".into())));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["message"], json!("An error occurred"));
    }
}
