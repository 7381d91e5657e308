//! Conversions into [`AppError`] and its HTTP rendering, each behind the
//! feature of the crate it bridges.

#[cfg(feature = "sqlx")]
use super::app_error::AppError;
#[cfg(feature = "sqlx")]
use super::kind::ErrorKind;

/// Postgres SQLSTATE for `unique_violation`
#[cfg(feature = "sqlx")]
const UNIQUE_VIOLATION: &str = "23505";

/// True when a constraint such as `users_user_name_canonical_key` rejected a row
#[cfg(feature = "sqlx")]
pub fn is_unique_violation(err: &dyn sqlx::error::DatabaseError) -> bool {
    err.code().as_deref() == Some(UNIQUE_VIOLATION)
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        let (kind, message) = match &err {
            sqlx::Error::RowNotFound => (ErrorKind::NotFound, "No such record"),
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                (ErrorKind::ServiceUnavailable, "Database unreachable")
            }
            sqlx::Error::Database(db) if is_unique_violation(&**db) => {
                (ErrorKind::Conflict, "Already exists")
            }
            _ => (ErrorKind::InternalServerError, "Database failure"),
        };
        AppError::new(kind, message).caused_by(err)
    }
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for super::app_error::AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, self.public_message().to_owned()).into_response()
    }
}
