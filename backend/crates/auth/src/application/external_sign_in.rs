//! External Sign In Use Case
//!
//! Google authorization-code flow:
//! 1. [`ExternalSignInUseCase::begin`] remembers state + PKCE verifier and
//!    returns the provider URL
//! 2. [`ExternalSignInUseCase::complete`] checks the state, redeems the code,
//!    finds or creates the user by Google id, and signs them in

use std::sync::Arc;

use crate::application::{config::AuthConfig, session_token};
use crate::domain::entity::handshake::PendingHandshake;
use crate::domain::provider::IdentityProvider;
use crate::domain::repository::{
    AuthSessionRepository, ExternalAccount, HandshakeRepository, UserRepository,
};
use crate::domain::value_object::user_id::UserId;
use crate::error::{AuthError, AuthResult};

/// Provider redirect
pub struct BeginOutput {
    pub authorize_url: String,
    /// Echoed into the `oauth_state` cookie
    pub state: String,
}

/// Query parameters the provider sends back
#[derive(Debug, Default)]
pub struct CallbackInput {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
    /// `oauth_state` cookie value
    pub state_cookie: Option<String>,
}

pub struct CompleteOutput {
    pub user_id: UserId,
    pub session_token: String,
}

pub struct ExternalSignInUseCase<U, S, P>
where
    U: UserRepository,
    S: AuthSessionRepository + HandshakeRepository,
    P: IdentityProvider,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    provider: Arc<P>,
    config: Arc<AuthConfig>,
}

impl<U, S, P> ExternalSignInUseCase<U, S, P>
where
    U: UserRepository,
    S: AuthSessionRepository + HandshakeRepository,
    P: IdentityProvider,
{
    pub fn new(
        user_repo: Arc<U>,
        session_repo: Arc<S>,
        provider: Arc<P>,
        config: Arc<AuthConfig>,
    ) -> Self {
        Self {
            user_repo,
            session_repo,
            provider,
            config,
        }
    }

    pub async fn begin(&self) -> AuthResult<BeginOutput> {
        let request = self.provider.authorize()?;

        let handshake = PendingHandshake::new(request.state.clone(), request.pkce_verifier);
        HandshakeRepository::save(self.session_repo.as_ref(), &handshake).await?;

        Ok(BeginOutput {
            authorize_url: request.url,
            state: request.state,
        })
    }

    pub async fn complete(&self, input: CallbackInput) -> AuthResult<CompleteOutput> {
        if let Some(error) = input.error {
            return Err(AuthError::HandshakeFailed(format!("provider returned {error}")));
        }

        let code = input
            .code
            .filter(|c| !c.is_empty())
            .ok_or_else(|| AuthError::HandshakeFailed("missing code".into()))?;
        let state = input
            .state
            .ok_or_else(|| AuthError::HandshakeFailed("missing state".into()))?;

        if input.state_cookie.as_deref() != Some(state.as_str()) {
            return Err(AuthError::HandshakeFailed("state cookie mismatch".into()));
        }

        let handshake = HandshakeRepository::take(self.session_repo.as_ref(), &state)
            .await?
            .ok_or_else(|| AuthError::HandshakeFailed("unknown or expired state".into()))?;

        let profile = self
            .provider
            .exchange(&code, &handshake.pkce_verifier)
            .await?;

        let ExternalAccount { user, created } = self
            .user_repo
            .find_or_create_by_google_id(&profile.subject)
            .await?;

        let session_token =
            session_token::establish(self.session_repo.as_ref(), &self.config, user.user_id)
                .await?;

        tracing::info!(user_id = %user.user_id, created, "User signed in with Google");

        Ok(CompleteOutput {
            user_id: user.user_id,
            session_token,
        })
    }
}
