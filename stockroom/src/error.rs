use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use stockroom_core::error_response;
use stockroom_data::{DataError, ValidationError};

pub const PRODUCT_NOT_FOUND: &str = "Product not found";
pub const INVALID_REQUEST_BODY: &str = "Invalid request body";
pub const INVALID_ID: &str = "Invalid id";

/// Every failure a handler can report. Rendered as `{"error": message}`.
///
/// Failures no handler classifies (panics) never become an `ApiError`; the
/// panic layer answers those with the generic 500.
#[derive(Debug)]
pub enum ApiError {
    /// A product field rule failed.
    Validation(ValidationError),
    /// The body was not a JSON product.
    MalformedRequest,
    /// The path id is not a 64-bit integer.
    InvalidId,
    NotFound,
    /// The store failed during a known operation.
    Store {
        message: &'static str,
        source: DataError,
    },
}

impl ApiError {
    /// Classify a store failure under an operation-specific message.
    ///
    /// ```ignore
    /// repo.insert(&input).await.map_err(ApiError::store("Could not create product"))?;
    /// ```
    pub fn store(message: &'static str) -> impl FnOnce(DataError) -> ApiError {
        move |source| ApiError::Store { message, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::MalformedRequest | ApiError::InvalidId => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ApiError::Validation(err) => err.message(),
            ApiError::MalformedRequest => INVALID_REQUEST_BODY,
            ApiError::InvalidId => INVALID_ID,
            ApiError::NotFound => PRODUCT_NOT_FOUND,
            ApiError::Store { message, .. } => *message,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Store { message, source } => write!(f, "{message}: {source}"),
            other => f.write_str(other.message()),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Validation(err) => Some(err),
            ApiError::Store { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::Store { message, source } => {
                tracing::error!(error = %source, "{message}");
            }
            other => tracing::debug!(status = %status, "{}", other.message()),
        }
        error_response(status, self.message())
    }
}
