//! Session Token Codec
//!
//! Cookie value format: `<session-uuid>.<base64url HMAC-SHA256(session-uuid)>`.
//! A token that fails to parse or verify is `SessionInvalid`.

use platform::crypto::{from_base64url, hmac_sha256, to_base64url, verify_hmac_sha256};

use crate::application::config::AuthConfig;
use crate::domain::entity::auth_session::AuthSession;
use crate::domain::repository::AuthSessionRepository;
use crate::domain::value_object::user_id::UserId;
use crate::error::{AuthError, AuthResult};
use kernel::id::SessionId;

/// Sign a session id
pub fn issue(secret: &[u8], session_id: &SessionId) -> String {
    let id = session_id.to_string();
    let signature = hmac_sha256(secret, id.as_bytes());
    format!("{}.{}", id, to_base64url(&signature))
}

/// Verify the signature and return the session id
pub fn parse(secret: &[u8], token: &str) -> AuthResult<SessionId> {
    let (id, signature_b64) = token.split_once('.').ok_or(AuthError::SessionInvalid)?;

    let signature = from_base64url(signature_b64).map_err(|_| AuthError::SessionInvalid)?;
    if !verify_hmac_sha256(secret, id.as_bytes(), &signature) {
        return Err(AuthError::SessionInvalid);
    }

    id.parse().map_err(|_| AuthError::SessionInvalid)
}

/// Create and store a session for `user_id`, returning its cookie token
pub(crate) async fn establish<S>(
    session_repo: &S,
    config: &AuthConfig,
    user_id: UserId,
) -> AuthResult<String>
where
    S: AuthSessionRepository,
{
    let session = AuthSession::new(user_id, config.session_ttl_chrono());
    session_repo.create(&session).await?;

    Ok(issue(&config.session_secret, &session.session_id))
}
