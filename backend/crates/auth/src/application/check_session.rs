//! Check Session Use Case
//!
//! Resolves a session cookie to the current user. The user is re-read from
//! the store on every call, and the session's expiry slides forward by the
//! configured TTL.

use std::sync::Arc;

use crate::application::{config::AuthConfig, session_token};
use crate::domain::entity::user::User;
use crate::domain::repository::{AuthSessionRepository, UserRepository};
use crate::error::{AuthError, AuthResult};

/// Check session use case
pub struct CheckSessionUseCase<U, S>
where
    U: UserRepository,
    S: AuthSessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<U, S> CheckSessionUseCase<U, S>
where
    U: UserRepository,
    S: AuthSessionRepository,
{
    pub fn new(user_repo: Arc<U>, session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            session_repo,
            config,
        }
    }

    pub async fn execute(&self, session_token: &str) -> AuthResult<User> {
        let session_id = session_token::parse(&self.config.session_secret, session_token)?;

        let mut session = self
            .session_repo
            .find_by_id(&session_id)
            .await?
            .ok_or(AuthError::SessionInvalid)?;

        if session.is_expired() {
            self.session_repo.delete(&session_id).await?;
            return Err(AuthError::SessionInvalid);
        }

        let Some(user) = self.user_repo.find_by_id(&session.user_id).await? else {
            tracing::warn!(user_id = %session.user_id, "Session refers to a missing user");
            self.session_repo.delete(&session_id).await?;
            return Err(AuthError::SessionInvalid);
        };

        session.touch(self.config.session_ttl_chrono());
        self.session_repo.update(&session).await?;

        Ok(user)
    }
}
