use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer <token>` header on a protected route.
    #[error("Not authenticated")]
    MissingToken,

    /// Token signature is valid but its `exp` claim is in the past.
    #[error("Token expired")]
    TokenExpired,

    /// Token could not be decoded or verified.
    #[error("Could not validate credentials: {0}")]
    InvalidToken(String),

    /// Token subject does not name an active user.
    #[error("Could not find user {0}")]
    UserNotFound(String),

    /// Login with an unknown username or a wrong password.
    #[error("Incorrect username or password")]
    IncorrectCredentials,

    /// Hashing or signing failed on our side.
    ///
    /// Results in a 500 Internal Server Error.
    #[error("Credential processing failed: {0}")]
    Crypto(String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` / `TokenExpired` / `UserNotFound` → 401 Unauthorized with a
///   `WWW-Authenticate: Bearer` challenge
/// - `InvalidToken` → 403 Forbidden with "Could not validate credentials"
/// - `IncorrectCredentials` → 400 Bad Request
/// - `Crypto` → 500 Internal Server Error with generic message
///
/// Token failures are logged at debug level while keeping client-facing messages
/// generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            Self::MissingToken => (StatusCode::UNAUTHORIZED, "Not authenticated"),
            Self::TokenExpired => (StatusCode::UNAUTHORIZED, "Token expired"),
            Self::UserNotFound(_) => (StatusCode::UNAUTHORIZED, "Could not find user"),
            Self::InvalidToken(_) => (StatusCode::FORBIDDEN, "Could not validate credentials"),
            Self::IncorrectCredentials => {
                (StatusCode::BAD_REQUEST, "Incorrect username or password")
            }
            Self::Crypto(_) => {
                tracing::error!("{}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        if status != StatusCode::INTERNAL_SERVER_ERROR {
            tracing::debug!("{}", self);
        }

        let body = Json(ErrorDto {
            detail: detail.to_string(),
        });

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                (status, [(header::WWW_AUTHENTICATE, "Bearer")], body).into_response()
            }
            _ => (status, body).into_response(),
        }
    }
}
