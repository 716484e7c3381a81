//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Username or email already registered
    #[error("User with this username or email already exists")]
    UserAlreadyExists,

    /// Unknown user, inactive user or wrong password
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// No bearer token on a protected route
    #[error("Authorization token is missing")]
    MissingToken,

    /// Bad signature, malformed token, wrong issuer or audience
    #[error("Authorization token is invalid")]
    InvalidToken,

    /// Token past its expiry
    #[error("Authorization token has expired")]
    TokenExpired,

    /// Request input failed validation
    #[error("{0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    ///
    /// Failed logins answer 400 like every other rejected auth form; only
    /// token failures answer 401.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::UserAlreadyExists
            | AuthError::InvalidCredentials
            | AuthError::Validation(_) => StatusCode::BAD_REQUEST,
            AuthError::MissingToken | AuthError::InvalidToken | AuthError::TokenExpired => {
                StatusCode::UNAUTHORIZED
            }
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::UserAlreadyExists => ErrorKind::Conflict,
            AuthError::InvalidCredentials
            | AuthError::MissingToken
            | AuthError::InvalidToken
            | AuthError::TokenExpired => ErrorKind::Unauthorized,
            AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Detail line shown in the envelope's `errors` list
    fn detail(&self) -> Option<String> {
        match self {
            AuthError::UserAlreadyExists => Some("Username or email already taken".to_string()),
            AuthError::InvalidCredentials => Some("Authentication failed".to_string()),
            AuthError::Validation(message) => Some(message.clone()),
            _ => None,
        }
    }

    /// Convert to AppError, keeping the underlying error as its source
    pub fn into_app_error(self) -> AppError {
        // Rendered status follows `status_code`, not `kind`.
        let kind = match self {
            AuthError::InvalidCredentials => ErrorKind::BadRequest,
            _ => self.kind(),
        };

        let message = match &self {
            AuthError::Validation(_) => "Validation failed".to_string(),
            other => other.to_string(),
        };

        let mut app_error = AppError::new(kind, message);
        if let Some(detail) = self.detail() {
            app_error = app_error.with_detail(detail);
        }

        match self {
            AuthError::Database(e) => app_error.with_source(e),
            AuthError::Internal(msg) => app_error.with_source(InternalFault(msg)),
            _ => app_error,
        }
    }

    /// Log the auth-specific cases; the rest is logged by `AppError`
    fn log(&self) {
        match self {
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::InvalidToken | AuthError::TokenExpired => {
                tracing::warn!(error = %self, "Rejected bearer token");
            }
            _ => {}
        }
    }
}

/// Message-only source for [`AuthError::Internal`]
#[derive(Debug, Error)]
#[error("{0}")]
struct InternalFault(String);

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

impl From<JsonRejection> for AuthError {
    fn from(rejection: JsonRejection) -> Self {
        AuthError::Validation(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AuthError::UserAlreadyExists.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AuthError::InvalidCredentials.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AuthError::InvalidToken.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AuthError::TokenExpired.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AuthError::MissingToken.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AuthError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_app_error_status_matches() {
        for err in [
            AuthError::UserAlreadyExists,
            AuthError::InvalidCredentials,
            AuthError::MissingToken,
            AuthError::Validation("Username is required".into()),
            AuthError::Internal("boom".into()),
        ] {
            let expected = err.status_code().as_u16();
            assert_eq!(err.into_app_error().status_code(), expected);
        }
    }

    #[test]
    fn test_conflict_envelope_parts() {
        let (message, details) = AuthError::UserAlreadyExists.into_app_error().public_parts();
        assert_eq!(message, "User with this username or email already exists");
        assert_eq!(details, vec!["Username or email already taken".to_string()]);
    }

    #[test]
    fn test_internal_is_not_exposed() {
        let app_error = AuthError::Internal("pool exhausted at 10.0.0.3".into()).into_app_error();
        let (message, details) = app_error.public_parts();
        assert!(!message.contains("10.0.0.3"));
        assert!(details.is_empty());
        assert!(std::error::Error::source(&app_error).is_some());
    }
}
