//! Auth Router

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::provider::IdentityProvider;
use crate::domain::repository::{AuthSessionRepository, HandshakeRepository, UserRepository};
use crate::infra::{google::GoogleOAuth, memory::MemorySessionStore, postgres::PgAuthRepository};
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::AuthMiddlewareState;

/// Create the Auth router with the production stores
pub fn auth_router(
    users: PgAuthRepository,
    sessions: MemorySessionStore,
    provider: GoogleOAuth,
    config: AuthConfig,
) -> Router {
    auth_router_generic(
        Arc::new(users),
        Arc::new(sessions),
        Arc::new(provider),
        Arc::new(config),
    )
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<U, S, P>(
    users: Arc<U>,
    sessions: Arc<S>,
    provider: Arc<P>,
    config: Arc<AuthConfig>,
) -> Router
where
    U: UserRepository + Send + Sync + 'static,
    S: AuthSessionRepository + HandshakeRepository + Send + Sync + 'static,
    P: IdentityProvider + Send + Sync + 'static,
{
    let state = AuthAppState {
        users,
        sessions,
        provider,
        config,
    };

    Router::new()
        .route(
            "/register",
            get(handlers::register_page).post(handlers::sign_up::<U, S, P>),
        )
        .route(
            "/login",
            get(handlers::login_page).post(handlers::sign_in::<U, S, P>),
        )
        .route("/auth/google", get(handlers::google_begin::<U, S, P>))
        .route(
            "/auth/google/secrets",
            get(handlers::google_callback::<U, S, P>),
        )
        .route("/logout", get(handlers::sign_out::<U, S, P>))
        .with_state(state)
}

/// State for [`require_auth_session`](crate::presentation::middleware::require_auth_session)
/// sharing the stores used by the router
pub fn auth_guard_state<U, S>(
    users: Arc<U>,
    sessions: Arc<S>,
    config: Arc<AuthConfig>,
) -> AuthMiddlewareState<U, S>
where
    U: UserRepository + Send + Sync + 'static,
    S: AuthSessionRepository + Send + Sync + 'static,
{
    AuthMiddlewareState {
        users,
        sessions,
        config,
    }
}
