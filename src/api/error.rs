//! API error handling
//!
//! Maps [`GameError`] onto HTTP status codes and a `{code, message}` body.

use crate::error::GameError;
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// JSON error body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: &'static str,
    /// Human-readable error message
    pub message: String,
}

/// Error response: status code plus body
#[derive(Debug, Clone)]
pub struct ApiErrorResponse {
    pub status: StatusCode,
    pub error: ApiError,
}

impl ApiErrorResponse {
    #[must_use]
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            error: ApiError {
                code,
                message: message.into(),
            },
        }
    }

    #[must_use]
    pub fn no_active_game() -> Self {
        Self::new(StatusCode::NOT_FOUND, "NO_ACTIVE_GAME", "no active game")
    }
}

impl From<GameError> for ApiErrorResponse {
    fn from(err: GameError) -> Self {
        let (status, code) = match &err {
            GameError::EmptyWord => (StatusCode::BAD_REQUEST, "EMPTY_WORD"),
            GameError::InvalidCharacter { .. } => (StatusCode::BAD_REQUEST, "INVALID_CHARACTER"),
            GameError::LengthMismatch { .. } => (StatusCode::BAD_REQUEST, "LENGTH_MISMATCH"),
            GameError::UnknownWord(_) => (StatusCode::BAD_REQUEST, "UNKNOWN_WORD"),
            GameError::SessionNotFound => (StatusCode::NOT_FOUND, "SESSION_NOT_FOUND"),
            GameError::SessionFinished => (StatusCode::CONFLICT, "SESSION_FINISHED"),
            GameError::NoWordsAvailable => {
                (StatusCode::SERVICE_UNAVAILABLE, "NO_WORDS_AVAILABLE")
            }
        };
        Self::new(status, code, err.to_string())
    }
}

impl From<JsonRejection> for ApiErrorResponse {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(rejection.status(), "INVALID_REQUEST", rejection.body_text())
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}
