//! Unified error handling.
//!
//! Provides a unified `AppError` type for route handlers. All handlers that
//! can fail return `Result<T, AppError>`.
//!
//! Error responses carry only a status code and an empty body. The reason is
//! sent as the HTTP/1.1 status-line reason phrase and logged.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use hyper::ext::ReasonPhrase;
use thiserror::Error;

use crate::services::auth::AuthError;

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Login failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Auth(AuthError::MissingCredentials) | Self::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Auth(AuthError::InvalidCredentials) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    /// Client-facing reason phrase for this error.
    #[must_use]
    pub fn reason(&self) -> &str {
        match self {
            Self::Auth(AuthError::MissingCredentials) => "Must provide username and password",
            Self::Auth(AuthError::InvalidCredentials) => "username or password not found",
            Self::NotFound(reason) | Self::BadRequest(reason) => reason,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(
            status = status.as_u16(),
            reason = self.reason(),
            "Request rejected"
        );

        let mut response = status.into_response();
        // Phrases with bytes not allowed on a status line fall back to the default.
        if let Ok(phrase) = ReasonPhrase::try_from(self.reason().as_bytes()) {
            response.extensions_mut().insert(phrase);
        }
        response
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
