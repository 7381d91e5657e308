//! Auth Error Types
//!
//! Auth-specific variants that integrate with `kernel::error::AppError`.
//! Form handlers turn client errors into redirects; only server errors reach
//! [`IntoResponse`].

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::password::{PasswordHashError, PasswordPolicyError};
use thiserror::Error;

use crate::domain::value_object::user_name::UserNameError;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

#[derive(Debug, Error)]
pub enum AuthError {
    /// User name already registered
    #[error("User name already exists")]
    UserNameTaken,

    #[error("Invalid user name: {0}")]
    InvalidUserName(#[from] UserNameError),

    #[error("Password validation failed: {0}")]
    PasswordValidation(#[from] PasswordPolicyError),

    /// Unknown user, external-only user, or wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Missing, forged, expired or orphaned session
    #[error("Session not found or expired")]
    SessionInvalid,

    /// OAuth callback could not be completed
    #[error("External sign-in failed: {0}")]
    HandshakeFailed(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::UserNameTaken => StatusCode::CONFLICT,
            AuthError::InvalidUserName(_) | AuthError::PasswordValidation(_) => {
                StatusCode::BAD_REQUEST
            }
            AuthError::InvalidCredentials | AuthError::SessionInvalid => StatusCode::UNAUTHORIZED,
            AuthError::HandshakeFailed(_) => StatusCode::BAD_GATEWAY,
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::UserNameTaken => ErrorKind::Conflict,
            AuthError::InvalidUserName(_) | AuthError::PasswordValidation(_) => {
                ErrorKind::BadRequest
            }
            AuthError::InvalidCredentials | AuthError::SessionInvalid => ErrorKind::Unauthorized,
            AuthError::HandshakeFailed(_) => ErrorKind::BadGateway,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Server-side failure that must not be turned into a redirect
    pub fn is_server_error(&self) -> bool {
        matches!(self, AuthError::Database(_) | AuthError::Internal(_))
    }

    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::HandshakeFailed(reason) => {
                tracing::warn!(reason = %reason, "External sign-in failed");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

impl From<PasswordHashError> for AuthError {
    fn from(err: PasswordHashError) -> Self {
        AuthError::Internal(err.to_string())
    }
}
