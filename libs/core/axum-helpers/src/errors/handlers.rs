use axum::{http::StatusCode, response::Response};

use super::{ErrorCode, error_response};

/// Fallback handler for unmatched routes.
pub async fn not_found() -> Response {
    tracing::debug!(error_code = ErrorCode::RouteNotFound.code(), "No route matched");
    error_response(
        StatusCode::NOT_FOUND,
        ErrorCode::RouteNotFound.default_message(),
    )
}
