//! Pending OAuth Handshake
//!
//! Remembers the CSRF `state` sent to the identity provider together with the
//! PKCE verifier needed to redeem the code. Single use.

use chrono::{DateTime, Duration, Utc};

/// How long a user may take on the provider's consent screen
pub const HANDSHAKE_TTL_MINUTES: i64 = 10;

#[derive(Debug, Clone)]
pub struct PendingHandshake {
    pub state: String,
    pub pkce_verifier: String,
    pub expires_at: DateTime<Utc>,
}

impl PendingHandshake {
    pub fn new(state: String, pkce_verifier: String) -> Self {
        Self {
            state,
            pkce_verifier,
            expires_at: Utc::now() + Duration::minutes(HANDSHAKE_TTL_MINUTES),
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_handshake() {
        let handshake = PendingHandshake::new("state".into(), "verifier".into());
        assert!(!handshake.is_expired());
        assert!(handshake.expires_at > Utc::now() + Duration::minutes(9));
    }

    #[test]
    fn test_expired_handshake() {
        let mut handshake = PendingHandshake::new("state".into(), "verifier".into());
        handshake.expires_at = Utc::now() - Duration::seconds(1);
        assert!(handshake.is_expired());
    }
}
