use axum::http::{Method, StatusCode, Uri};
use axum::response::Response;
use stockroom_core::error_response;

pub async fn root() -> &'static str {
    "Hello world"
}

pub async fn unknown_route(method: Method, uri: Uri) -> Response {
    error_response(
        StatusCode::NOT_FOUND,
        format!("Cannot {method} {}", uri.path()),
    )
}

pub async fn method_not_allowed() -> Response {
    error_response(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
}
