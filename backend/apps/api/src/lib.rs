//! Secrets web application
//!
//! Composes the `auth` and `secrets` routers with the landing page and
//! request tracing. `main` supplies the production stores; tests supply
//! in-memory ones.

pub mod config;
pub mod views;

use std::sync::Arc;

use auth::AuthConfig;
use auth::provider::IdentityProvider;
use auth::store::{AuthSessionRepository, HandshakeRepository, UserRepository};
use axum::{Router, response::Html, routing::get};
use secrets::domain::repository::SecretRepository;
use tower_http::trace::TraceLayer;

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

/// Full application router
pub fn build_router<U, S, P, R>(
    users: Arc<U>,
    sessions: Arc<S>,
    provider: Arc<P>,
    secrets: Arc<R>,
    config: Arc<AuthConfig>,
) -> Router
where
    U: UserRepository + Send + Sync + 'static,
    S: AuthSessionRepository + HandshakeRepository + Send + Sync + 'static,
    P: IdentityProvider + Send + Sync + 'static,
    R: SecretRepository + Send + Sync + 'static,
{
    let guard = auth::auth_guard_state(users.clone(), sessions.clone(), config.clone());

    Router::new()
        .route("/", get(home))
        .merge(auth::auth_router_generic(users, sessions, provider, config))
        .merge(secrets::secrets_router_generic(secrets, guard))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
}

/// GET /
async fn home() -> Html<String> {
    Html(views::home_page())
}

async fn not_found() -> AppError {
    AppError::not_found("Page not found")
}
