//! Error handling module
//!
//! Centralized error types and HTTP response conversion.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::ValidationError;
use crate::store::StoreError;

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Client errors (4xx)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Squirrel not found: {0}")]
    SquirrelNotFound(String),

    #[error("Route not found: {0}")]
    RouteNotFound(String),

    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    // Server errors (5xx)
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    /// HTTP status this error renders as
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::SquirrelNotFound(_) | AppError::RouteNotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            // Contention is transient; the client may retry
            AppError::Store(e) if e.is_busy() => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Store(_) | AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let (error_code, details) = match &self {
            // 400 Bad Request
            AppError::InvalidRequest(msg) => ("invalid_request", Some(msg.clone())),
            AppError::Validation(e) => ("validation_failed", Some(e.field().to_string())),

            // 404 Not Found
            AppError::SquirrelNotFound(id) => ("squirrel_not_found", Some(id.clone())),
            AppError::RouteNotFound(path) => ("route_not_found", Some(path.clone())),

            // 405 Method Not Allowed
            AppError::MethodNotAllowed(method) => ("method_not_allowed", Some(method.clone())),

            // 500 / 503
            AppError::Store(e) => {
                tracing::error!("Store error: {:?}", e);
                if e.is_busy() {
                    ("store_busy", None)
                } else {
                    ("store_error", None)
                }
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                ("database_error", None)
            }
        };

        let body = ErrorResponse {
            error: self.to_string(),
            error_code: error_code.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}
