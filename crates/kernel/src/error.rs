//! Application error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Application errors.
///
/// Fragment-level resolution failures (dangling references, unknown rich
/// text shapes) never surface here — queries absorb them into empty
/// output. These variants cover failures that must reach the route
/// boundary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("content fetch failed: {0}")]
    Fetch(String),

    #[error("not found")]
    NotFound,

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("internal server error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Fetch(_) => StatusCode::BAD_GATEWAY,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // In development, include error details; in production, be vague
        let body = match &self {
            AppError::Fetch(e) => {
                tracing::error!(error = %e, "content fetch failed");
                "content backend unavailable".to_string()
            }
            AppError::Internal(e) => {
                tracing::error!(error = %e, "internal server error");
                "internal server error".to_string()
            }
            _ => self.to_string(),
        };

        (status, body).into_response()
    }
}

/// Result type alias using AppError.
pub type AppResult<T> = Result<T, AppError>;
