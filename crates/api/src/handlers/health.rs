use axum::http::{Method, StatusCode, Uri};
use axum::response::Response;
use serde_json::json;

use crate::envelope::{build_envelope, Envelope, Reply};

/// GET /health
pub async fn check() -> Response {
    build_envelope(Ok(Reply::ok("Service is healthy", json!({ "status": "ok" }))))
}

/// Any route that isn't registered.
pub async fn not_found(uri: Uri) -> Envelope {
    Envelope::failure(StatusCode::NOT_FOUND, "Route not found", format!("no route for {uri}"))
}

/// A registered route hit with a method it doesn't serve.
pub async fn method_not_allowed(method: Method, uri: Uri) -> Envelope {
    Envelope::failure(
        StatusCode::METHOD_NOT_ALLOWED,
        "Method not allowed",
        format!("{method} is not supported on {}", uri.path()),
    )
}
