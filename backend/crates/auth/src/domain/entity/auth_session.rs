//! Auth Session Entity
//!
//! Server-side record behind the session cookie. Holds the user id only; the
//! user itself is re-fetched on every request.

use chrono::{DateTime, Duration, Utc};

use crate::domain::value_object::user_id::UserId;
use kernel::id::SessionId;

#[derive(Debug, Clone)]
pub struct AuthSession {
    pub session_id: SessionId,
    pub user_id: UserId,
    /// Session expiration (Unix timestamp ms), pushed forward on each use
    pub expires_at_ms: i64,
    pub created_at: DateTime<Utc>,
}

impl AuthSession {
    /// TTL comes from `AuthConfig`
    pub fn new(user_id: UserId, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            session_id: SessionId::new(),
            user_id,
            expires_at_ms: (now + ttl).timestamp_millis(),
            created_at: now,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp_millis() > self.expires_at_ms
    }

    /// Sliding expiry: a session in use lives `ttl` past its last request
    pub fn touch(&mut self, ttl: Duration) {
        self.touch_at(Utc::now(), ttl);
    }

    pub fn touch_at(&mut self, now: DateTime<Utc>, ttl: Duration) {
        self.expires_at_ms = self.expires_at_ms.max((now + ttl).timestamp_millis());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_not_expired() {
        let session = AuthSession::new(UserId::new(), Duration::hours(24));
        assert!(!session.is_expired());
    }

    #[test]
    fn test_expired_session() {
        let session = AuthSession::new(UserId::new(), Duration::seconds(-1));
        assert!(session.is_expired());
    }

    #[test]
    fn test_expiry_boundary() {
        let session = AuthSession::new(UserId::new(), Duration::minutes(5));
        let later = session.created_at + Duration::minutes(6);
        assert!(session.is_expired_at(later));
        assert!(!session.is_expired_at(session.created_at));
    }

    #[test]
    fn test_touch_extends_expiry() {
        let ttl = Duration::minutes(5);
        let mut session = AuthSession::new(UserId::new(), ttl);
        let later = session.created_at + Duration::minutes(4);

        session.touch_at(later, ttl);

        assert_eq!(session.expires_at_ms, (later + ttl).timestamp_millis());
        assert!(!session.is_expired_at(session.created_at + Duration::minutes(8)));
        assert!(session.is_expired_at(session.created_at + Duration::minutes(10)));
    }

    #[test]
    fn test_touch_never_shortens() {
        let mut session = AuthSession::new(UserId::new(), Duration::hours(24));
        let before = session.expires_at_ms;
        session.touch(Duration::minutes(1));
        assert_eq!(session.expires_at_ms, before);
    }
}
