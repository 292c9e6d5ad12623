use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use seedscan_engine::EngineError;

use crate::dto::ErrorResponseDto;

/// Maps an engine error, or a service-level rejection, onto the HTTP
/// error contract: validation errors are the caller's fault (400), a
/// full admission semaphore is 503, anything else is ours (500).
pub enum ApiError {
    Engine(EngineError),
    AtCapacity,
}

impl From<EngineError> for ApiError {
    fn from(e: EngineError) -> Self {
        ApiError::Engine(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Engine(EngineError::Validation(msg)) => (StatusCode::BAD_REQUEST, msg.to_string()),
            ApiError::Engine(EngineError::Internal(msg)) => {
                tracing::error!(error = %msg, "internal error handling request");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error".to_string())
            }
            ApiError::AtCapacity => (
                StatusCode::SERVICE_UNAVAILABLE,
                "too many searches in flight, try again shortly".to_string(),
            ),
        };
        (status, Json(ErrorResponseDto { error: message })).into_response()
    }
}
