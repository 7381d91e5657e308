//! Repository Traits
//!
//! Interfaces for persistence. Implementations live in the infrastructure
//! layer: Postgres for users, process memory for sessions and handshakes.

use crate::domain::entity::{auth_session::AuthSession, handshake::PendingHandshake, user::User};
use crate::domain::value_object::{google_id::GoogleId, user_id::UserId, user_name::UserName};
use crate::error::AuthResult;
use kernel::id::SessionId;

/// Result of a Google find-or-create; `created` is decided by the store's
/// own atomic insert, so racing callbacks cannot both claim it
#[derive(Debug, Clone)]
pub struct ExternalAccount {
    pub user: User,
    pub created: bool,
}

/// User store
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a new user; `UserNameTaken` if the canonical name exists
    async fn create(&self, user: &User) -> AuthResult<()>;

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Lookup by canonical (lowercase) user name
    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>>;

    /// Return the user with this Google id, creating one atomically if absent
    async fn find_or_create_by_google_id(
        &self,
        google_id: &GoogleId,
    ) -> AuthResult<ExternalAccount>;

    async fn exists_by_user_name(&self, user_name: &UserName) -> AuthResult<bool>;

    /// Persist mutable fields (secret, updated_at)
    async fn update(&self, user: &User) -> AuthResult<()>;
}

/// Auth session repository trait
#[trait_variant::make(AuthSessionRepository: Send)]
pub trait LocalAuthSessionRepository {
    async fn create(&self, session: &AuthSession) -> AuthResult<()>;

    async fn find_by_id(&self, session_id: &SessionId) -> AuthResult<Option<AuthSession>>;

    /// Update session (last activity)
    async fn update(&self, session: &AuthSession) -> AuthResult<()>;

    /// Delete a session; deleting a missing session is not an error
    async fn delete(&self, session_id: &SessionId) -> AuthResult<()>;

    /// Remove expired sessions, returning how many were dropped
    async fn cleanup_expired(&self) -> AuthResult<u64>;
}

/// Pending OAuth handshakes, keyed by CSRF state
#[trait_variant::make(HandshakeRepository: Send)]
pub trait LocalHandshakeRepository {
    async fn save(&self, handshake: &PendingHandshake) -> AuthResult<()>;

    /// Remove and return the handshake for `state`; expired entries yield `None`
    async fn take(&self, state: &str) -> AuthResult<Option<PendingHandshake>>;

    async fn cleanup_expired_handshakes(&self) -> AuthResult<u64>;
}
