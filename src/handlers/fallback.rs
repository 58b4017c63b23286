use crate::error::ApiError;
use axum::http::Uri;

/// Fallback for paths with no registered route.
///
/// Only reached once the request has passed the security policy, so
/// unauthenticated callers see 403 rather than 404.
pub async fn not_found_handler(uri: Uri) -> ApiError {
    tracing::debug!("No route for path: {}", uri.path());
    ApiError::NotFound(uri.path().to_string())
}
