use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error response type
#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Custom error type for API endpoints
///
/// Maps each failure to its HTTP status code and renders it as a JSON body.
#[derive(Debug, PartialEq, Eq)]
pub enum ApiError {
    /// Request targets a protected path without valid credentials
    AuthorizationDenied,
    /// Authenticated request for a path with no registered route
    NotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::AuthorizationDenied => (
                StatusCode::FORBIDDEN,
                "Access denied".to_string(),
            ),
            ApiError::NotFound(path) => (
                StatusCode::NOT_FOUND,
                format!("No route for path: {}", path),
            ),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}
