//! In-Memory Stores
//!
//! [`MemorySessionStore`] is the production session table: process-scoped,
//! lost on restart. [`MemoryUserRepository`] backs tests and database-less runs.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::entity::{auth_session::AuthSession, handshake::PendingHandshake, user::User};
use crate::domain::repository::{
    AuthSessionRepository, ExternalAccount, HandshakeRepository, UserRepository,
};
use crate::domain::value_object::{google_id::GoogleId, user_id::UserId, user_name::UserName};
use crate::error::{AuthError, AuthResult};
use kernel::id::SessionId;

// ============================================================================
// Sessions and handshakes
// ============================================================================

/// Upper bound on pending OAuth handshakes; anyone can start one
pub const MAX_PENDING_HANDSHAKES: usize = 10_000;

#[derive(Clone, Debug)]
pub struct MemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, AuthSession>>>,
    handshakes: Arc<RwLock<HashMap<String, PendingHandshake>>>,
    handshake_capacity: usize,
}

impl Default for MemorySessionStore {
    fn default() -> Self {
        Self {
            sessions: Arc::default(),
            handshakes: Arc::default(),
            handshake_capacity: MAX_PENDING_HANDSHAKES,
        }
    }
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Purge expired sessions and handshakes in one pass
    pub async fn purge_expired(&self) -> AuthResult<u64> {
        let sessions = AuthSessionRepository::cleanup_expired(self).await?;
        let handshakes = HandshakeRepository::cleanup_expired_handshakes(self).await?;
        Ok(sessions + handshakes)
    }
}

impl AuthSessionRepository for MemorySessionStore {
    async fn create(&self, session: &AuthSession) -> AuthResult<()> {
        self.sessions
            .write()
            .await
            .insert(session.session_id, session.clone());
        Ok(())
    }

    async fn find_by_id(&self, session_id: &SessionId) -> AuthResult<Option<AuthSession>> {
        Ok(self.sessions.read().await.get(session_id).cloned())
    }

    async fn update(&self, session: &AuthSession) -> AuthResult<()> {
        // A concurrent logout wins over an activity update
        if let Some(stored) = self.sessions.write().await.get_mut(&session.session_id) {
            *stored = session.clone();
        }
        Ok(())
    }

    async fn delete(&self, session_id: &SessionId) -> AuthResult<()> {
        self.sessions.write().await.remove(session_id);
        Ok(())
    }

    async fn cleanup_expired(&self) -> AuthResult<u64> {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| !s.is_expired_at(now));
        let deleted = (before - sessions.len()) as u64;

        tracing::info!(sessions_deleted = deleted, "Cleaned up expired auth sessions");
        Ok(deleted)
    }
}

impl HandshakeRepository for MemorySessionStore {
    async fn save(&self, handshake: &PendingHandshake) -> AuthResult<()> {
        let mut handshakes = self.handshakes.write().await;

        if handshakes.len() >= self.handshake_capacity {
            handshakes.retain(|_, h| !h.is_expired());
        }
        // Still full: the oldest pending sign-in loses its slot
        while handshakes.len() >= self.handshake_capacity {
            let Some(oldest) = handshakes
                .iter()
                .min_by_key(|(_, h)| h.expires_at)
                .map(|(state, _)| state.clone())
            else {
                break;
            };
            handshakes.remove(&oldest);
            tracing::warn!("Pending handshake table full, evicted oldest entry");
        }

        handshakes.insert(handshake.state.clone(), handshake.clone());
        Ok(())
    }

    async fn take(&self, state: &str) -> AuthResult<Option<PendingHandshake>> {
        let handshake = self.handshakes.write().await.remove(state);
        Ok(handshake.filter(|h| !h.is_expired()))
    }

    async fn cleanup_expired_handshakes(&self) -> AuthResult<u64> {
        let mut handshakes = self.handshakes.write().await;
        let before = handshakes.len();
        handshakes.retain(|_, h| !h.is_expired());
        Ok((before - handshakes.len()) as u64)
    }
}

// ============================================================================
// Users
// ============================================================================

/// Users kept in insertion order
#[derive(Clone, Debug, Default)]
pub struct MemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every user, oldest first
    pub async fn all(&self) -> Vec<User> {
        self.users.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }

    async fn find_by<F>(&self, predicate: F) -> Option<User>
    where
        F: Fn(&User) -> bool,
    {
        self.users.read().await.iter().find(|u| predicate(u)).cloned()
    }
}

impl UserRepository for MemoryUserRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        let mut users = self.users.write().await;

        if let Some(name) = user.user_name() {
            let taken = users
                .iter()
                .filter_map(User::user_name)
                .any(|existing| existing.canonical() == name.canonical());
            if taken {
                return Err(AuthError::UserNameTaken);
            }
        }

        users.push(user.clone());
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        Ok(self.find_by(|u| &u.user_id == user_id).await)
    }

    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>> {
        Ok(self
            .find_by(|u| u.user_name().map(UserName::canonical) == Some(user_name.canonical()))
            .await)
    }

    async fn find_or_create_by_google_id(
        &self,
        google_id: &GoogleId,
    ) -> AuthResult<ExternalAccount> {
        // Single write lock so two callbacks cannot both insert
        let mut users = self.users.write().await;

        if let Some(user) = users.iter().find(|u| u.google_id() == Some(google_id)) {
            return Ok(ExternalAccount {
                user: user.clone(),
                created: false,
            });
        }

        let user = User::external(google_id.clone());
        users.push(user.clone());
        Ok(ExternalAccount {
            user,
            created: true,
        })
    }

    async fn exists_by_user_name(&self, user_name: &UserName) -> AuthResult<bool> {
        Ok(self.find_by_user_name(user_name).await?.is_some())
    }

    async fn update(&self, user: &User) -> AuthResult<()> {
        let mut users = self.users.write().await;
        let stored = users
            .iter_mut()
            .find(|u| u.user_id == user.user_id)
            .ok_or_else(|| AuthError::Internal(format!("User {} not found", user.user_id)))?;

        stored.secret = user.secret.clone();
        stored.updated_at = user.updated_at;
        Ok(())
    }
}
