//! Application Error
//!
//! Every crate-level error enum (`AuthError`, `SecretError`) ends up as an
//! [`AppError`] before it is written to the wire.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use super::kind::ErrorKind;

type Cause = Box<dyn Error + Send + Sync + 'static>;

/// Error crossing the HTTP boundary
///
/// The message is meant for the browser; the optional cause is only ever
/// logged.
///
/// ```rust
/// use kernel::error::app_error::AppError;
///
/// let err = AppError::conflict("User name already exists");
/// assert_eq!(err.status_code(), 409);
/// assert_eq!(err.public_message(), "User name already exists");
/// ```
pub struct AppError {
    kind: ErrorKind,
    message: Cow<'static, str>,
    cause: Option<Cause>,
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            cause: None,
        }
    }

    pub fn not_found(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    pub fn conflict(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    pub fn internal(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InternalServerError, message)
    }

    pub fn caused_by<E>(mut self, cause: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.cause = Some(Box::new(cause));
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Text safe to render: the message for 4xx, only the reason phrase for 5xx
    pub fn public_message(&self) -> &str {
        if self.kind.is_server_error() {
            self.kind.reason()
        } else {
            &self.message
        }
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppError")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .field("cause", &self.cause)
            .finish()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_deref().map(|cause| cause as &(dyn Error + 'static))
    }
}
