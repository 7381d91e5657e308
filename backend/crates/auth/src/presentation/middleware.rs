//! Auth Middleware
//!
//! Resolves the session cookie on protected routes and exposes the current
//! user to handlers as an [`Extension`](axum::Extension). The cookie is sent
//! again on the way out so its `Max-Age` follows the sliding session expiry.

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderValue, Request, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use std::sync::Arc;

use crate::application::CheckSessionUseCase;
use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::{AuthSessionRepository, UserRepository};
use crate::presentation::handlers::session_cookie;

/// Middleware state
pub struct AuthMiddlewareState<U, S>
where
    U: UserRepository + Send + Sync + 'static,
    S: AuthSessionRepository + Send + Sync + 'static,
{
    pub users: Arc<U>,
    pub sessions: Arc<S>,
    pub config: Arc<AuthConfig>,
}

impl<U, S> Clone for AuthMiddlewareState<U, S>
where
    U: UserRepository + Send + Sync + 'static,
    S: AuthSessionRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            users: self.users.clone(),
            sessions: self.sessions.clone(),
            config: self.config.clone(),
        }
    }
}

/// Authenticated user, fetched fresh for this request
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Middleware that requires a valid auth session
///
/// Anonymous or stale sessions are redirected to `/login`.
pub async fn require_auth_session<U, S>(
    State(state): State<AuthMiddlewareState<U, S>>,
    mut req: Request<Body>,
    next: Next,
) -> Response
where
    U: UserRepository + Send + Sync + 'static,
    S: AuthSessionRepository + Send + Sync + 'static,
{
    let Some(token) =
        platform::cookie::extract_cookie(req.headers(), &state.config.session_cookie_name)
    else {
        return Redirect::to("/login").into_response();
    };

    let use_case = CheckSessionUseCase::new(
        state.users.clone(),
        state.sessions.clone(),
        state.config.clone(),
    );

    match use_case.execute(&token).await {
        Ok(user) => {
            req.extensions_mut().insert(CurrentUser(user));
            let mut response = next.run(req).await;
            refresh_session_cookie(&mut response, &state.config, &token);
            response
        }
        Err(e) if e.is_server_error() => e.into_response(),
        Err(e) => {
            e.log();
            Redirect::to("/login").into_response()
        }
    }
}

/// Re-send the session cookie unless the handler already set one
fn refresh_session_cookie(response: &mut Response, config: &AuthConfig, token: &str) {
    let prefix = format!("{}=", config.session_cookie_name);
    let already_set = response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .any(|v| v.starts_with(&prefix));
    if already_set {
        return;
    }

    if let Ok(value) = HeaderValue::from_str(&session_cookie(config).build_set_cookie(token)) {
        response.headers_mut().append(header::SET_COOKIE, value);
    }
}
