//! Secrets Router

use axum::{Router, middleware::from_fn_with_state, routing::get};
use std::sync::Arc;

use auth::presentation::middleware::{AuthMiddlewareState, require_auth_session};
use auth::store::{AuthSessionRepository, UserRepository};

use crate::domain::repository::SecretRepository;
use crate::infra::postgres::PgSecretRepository;
use crate::presentation::handlers::{self, SecretsAppState};

/// Create the Secrets router with PostgreSQL repository
pub fn secrets_router<U, S>(
    repo: PgSecretRepository,
    guard: AuthMiddlewareState<U, S>,
) -> Router
where
    U: UserRepository + Send + Sync + 'static,
    S: AuthSessionRepository + Send + Sync + 'static,
{
    secrets_router_generic(Arc::new(repo), guard)
}

/// `/secrets` is public; `/submit` requires a session
pub fn secrets_router_generic<R, U, S>(repo: Arc<R>, guard: AuthMiddlewareState<U, S>) -> Router
where
    R: SecretRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
    S: AuthSessionRepository + Send + Sync + 'static,
{
    let state = SecretsAppState { repo };

    let protected = Router::new()
        .route(
            "/submit",
            get(handlers::submit_page).post(handlers::submit_secret::<R>),
        )
        .route_layer(from_fn_with_state(guard, require_auth_session::<U, S>));

    Router::new()
        .route("/secrets", get(handlers::list_secrets::<R>))
        .merge(protected)
        .with_state(state)
}
