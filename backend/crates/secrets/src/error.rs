//! Secrets Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::value_object::SecretTextError;

pub type SecretResult<T> = Result<T, SecretError>;

#[derive(Debug, Error)]
pub enum SecretError {
    #[error("Invalid secret: {0}")]
    InvalidSecret(#[from] SecretTextError),

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl SecretError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SecretError::InvalidSecret(_) => StatusCode::BAD_REQUEST,
            SecretError::UserNotFound => StatusCode::NOT_FOUND,
            SecretError::Database(_) | SecretError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            SecretError::InvalidSecret(_) => ErrorKind::BadRequest,
            SecretError::UserNotFound => ErrorKind::NotFound,
            SecretError::Database(_) | SecretError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn is_server_error(&self) -> bool {
        self.kind().is_server_error()
    }

    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    pub fn log(&self) {
        match self {
            SecretError::Database(e) => {
                tracing::error!(error = %e, "Secrets database error");
            }
            SecretError::Internal(msg) => {
                tracing::error!(message = %msg, "Secrets internal error");
            }
            SecretError::UserNotFound => {
                tracing::warn!("Secret submitted for a missing user");
            }
            SecretError::InvalidSecret(e) => {
                tracing::debug!(error = %e, "Rejected secret");
            }
        }
    }
}

impl IntoResponse for SecretError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<auth::AuthError> for SecretError {
    fn from(err: auth::AuthError) -> Self {
        match err {
            auth::AuthError::Database(e) => SecretError::Database(e),
            other => SecretError::Internal(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(
            SecretError::InvalidSecret(SecretTextError::Empty).kind(),
            ErrorKind::BadRequest
        );
        assert_eq!(SecretError::UserNotFound.status_code(), StatusCode::NOT_FOUND);
        assert!(SecretError::Internal("x".into()).is_server_error());
    }

    #[test]
    fn test_auth_database_error_kept() {
        let err: SecretError = auth::AuthError::Database(sqlx::Error::PoolTimedOut).into();
        assert!(matches!(err, SecretError::Database(_)));

        let err: SecretError = auth::AuthError::SessionInvalid.into();
        assert!(matches!(err, SecretError::Internal(_)));
    }
}
