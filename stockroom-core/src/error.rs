use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Message sent for failures that carry no client-facing classification.
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

/// Helper to create a JSON error response with a standard `{ "error": message }` body.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let body = serde_json::json!({ "error": message.into() });
    (status, Json(body)).into_response()
}

/// The generic 500 response used for unclassified failures.
pub fn internal_error_response() -> Response {
    error_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR)
}
