//! Error Kind
//!
//! The handful of outcomes the secrets service reports over HTTP.

/// Coarse classification of a failure, one per status code the service emits
///
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// assert_eq!(ErrorKind::Conflict.status_code(), 409);
/// assert!(ErrorKind::BadGateway.is_server_error());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Form input failed validation
    BadRequest,
    /// No valid session, or credentials rejected
    Unauthorized,
    NotFound,
    /// User name already registered
    Conflict,
    InternalServerError,
    /// Identity provider answered with garbage or not at all
    BadGateway,
    /// Database pool exhausted or unreachable
    ServiceUnavailable,
}

impl ErrorKind {
    const TABLE: [(ErrorKind, u16, &'static str); 7] = [
        (ErrorKind::BadRequest, 400, "Bad Request"),
        (ErrorKind::Unauthorized, 401, "Unauthorized"),
        (ErrorKind::NotFound, 404, "Not Found"),
        (ErrorKind::Conflict, 409, "Conflict"),
        (ErrorKind::InternalServerError, 500, "Internal Server Error"),
        (ErrorKind::BadGateway, 502, "Bad Gateway"),
        (ErrorKind::ServiceUnavailable, 503, "Service Unavailable"),
    ];

    fn entry(self) -> (u16, &'static str) {
        Self::TABLE
            .iter()
            .find(|(kind, _, _)| *kind == self)
            .map(|(_, code, reason)| (*code, *reason))
            .unwrap_or((500, "Internal Server Error"))
    }

    pub fn status_code(self) -> u16 {
        self.entry().0
    }

    /// HTTP reason phrase, also the only text shown for 5xx responses
    pub fn reason(self) -> &'static str {
        self.entry().1
    }

    pub fn is_server_error(self) -> bool {
        self.status_code() >= 500
    }

    pub fn is_client_error(self) -> bool {
        (400..500).contains(&self.status_code())
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.status_code(), self.reason())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_has_a_row() {
        for (kind, code, reason) in ErrorKind::TABLE {
            assert_eq!(kind.status_code(), code);
            assert_eq!(kind.reason(), reason);
        }
    }

    #[test]
    fn test_classification() {
        assert!(ErrorKind::Conflict.is_client_error());
        assert!(!ErrorKind::Conflict.is_server_error());
        assert!(ErrorKind::ServiceUnavailable.is_server_error());
        assert!(!ErrorKind::InternalServerError.is_client_error());
    }

    #[test]
    fn test_display_includes_code() {
        assert_eq!(ErrorKind::Unauthorized.to_string(), "401 Unauthorized");
    }
}
