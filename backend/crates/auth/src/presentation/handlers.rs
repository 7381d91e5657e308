//! HTTP Handlers
//!
//! Form endpoints answer with `303 See Other`. Client errors become a
//! redirect back to the form; server errors become a 500.

use axum::Form;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, header};
use axum::response::{Html, IntoResponse, Redirect, Response};
use std::sync::Arc;

use platform::cookie::{CookieConfig, extract_cookie};

use crate::application::config::AuthConfig;
use crate::application::{
    CallbackInput, ExternalSignInUseCase, SignInInput, SignInUseCase, SignOutUseCase,
    SignUpInput, SignUpUseCase,
};
use crate::domain::provider::IdentityProvider;
use crate::domain::repository::{AuthSessionRepository, HandshakeRepository, UserRepository};
use crate::error::AuthError;
use crate::presentation::dto::{CredentialsForm, OAuthCallbackQuery};
use crate::presentation::views;

/// Cookie carrying the OAuth CSRF state across the provider round trip
pub const OAUTH_STATE_COOKIE: &str = "oauth_state";

/// Shared state for auth handlers
pub struct AuthAppState<U, S, P>
where
    U: UserRepository + Send + Sync + 'static,
    S: AuthSessionRepository + HandshakeRepository + Send + Sync + 'static,
    P: IdentityProvider + Send + Sync + 'static,
{
    pub users: Arc<U>,
    pub sessions: Arc<S>,
    pub provider: Arc<P>,
    pub config: Arc<AuthConfig>,
}

// Manual impl: only the Arcs need to be cloned
impl<U, S, P> Clone for AuthAppState<U, S, P>
where
    U: UserRepository + Send + Sync + 'static,
    S: AuthSessionRepository + HandshakeRepository + Send + Sync + 'static,
    P: IdentityProvider + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            users: self.users.clone(),
            sessions: self.sessions.clone(),
            provider: self.provider.clone(),
            config: self.config.clone(),
        }
    }
}

// ============================================================================
// Pages
// ============================================================================

/// GET /login
pub async fn login_page() -> Html<String> {
    Html(views::login_page())
}

/// GET /register
pub async fn register_page() -> Html<String> {
    Html(views::register_page())
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /register
pub async fn sign_up<U, S, P>(
    State(state): State<AuthAppState<U, S, P>>,
    Form(form): Form<CredentialsForm>,
) -> Response
where
    U: UserRepository + Send + Sync + 'static,
    S: AuthSessionRepository + HandshakeRepository + Send + Sync + 'static,
    P: IdentityProvider + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(
        state.users.clone(),
        state.sessions.clone(),
        state.config.clone(),
    );

    let input = SignUpInput {
        user_name: form.username,
        password: form.password,
    };

    match use_case.execute(input).await {
        Ok(output) => signed_in(&state.config, &output.session_token),
        Err(e) => redirect_on_client_error(e, "/register"),
    }
}

// ============================================================================
// Sign In
// ============================================================================

/// POST /login
pub async fn sign_in<U, S, P>(
    State(state): State<AuthAppState<U, S, P>>,
    Form(form): Form<CredentialsForm>,
) -> Response
where
    U: UserRepository + Send + Sync + 'static,
    S: AuthSessionRepository + HandshakeRepository + Send + Sync + 'static,
    P: IdentityProvider + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(
        state.users.clone(),
        state.sessions.clone(),
        state.config.clone(),
    );

    let input = SignInInput {
        user_name: form.username,
        password: form.password,
    };

    match use_case.execute(input).await {
        Ok(output) => signed_in(&state.config, &output.session_token),
        Err(e) => redirect_on_client_error(e, "/login"),
    }
}

// ============================================================================
// Google
// ============================================================================

/// GET /auth/google
pub async fn google_begin<U, S, P>(State(state): State<AuthAppState<U, S, P>>) -> Response
where
    U: UserRepository + Send + Sync + 'static,
    S: AuthSessionRepository + HandshakeRepository + Send + Sync + 'static,
    P: IdentityProvider + Send + Sync + 'static,
{
    let use_case = external_use_case(&state);

    match use_case.begin().await {
        Ok(output) => {
            let cookie = oauth_state_cookie(&state.config).build_set_cookie(&output.state);
            (
                [(header::SET_COOKIE, cookie)],
                Redirect::to(&output.authorize_url),
            )
                .into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// GET /auth/google/secrets
pub async fn google_callback<U, S, P>(
    State(state): State<AuthAppState<U, S, P>>,
    headers: HeaderMap,
    Query(query): Query<OAuthCallbackQuery>,
) -> Response
where
    U: UserRepository + Send + Sync + 'static,
    S: AuthSessionRepository + HandshakeRepository + Send + Sync + 'static,
    P: IdentityProvider + Send + Sync + 'static,
{
    let use_case = external_use_case(&state);

    let input = CallbackInput {
        code: query.code,
        state: query.state,
        error: query.error,
        state_cookie: extract_cookie(&headers, OAUTH_STATE_COOKIE),
    };

    let clear_state = oauth_state_cookie(&state.config).build_delete_cookie();

    let mut response = match use_case.complete(input).await {
        Ok(output) => signed_in(&state.config, &output.session_token),
        Err(e) if e.is_server_error() => e.into_response(),
        Err(e) => {
            e.log();
            Redirect::to("/login").into_response()
        }
    };

    if let Ok(value) = clear_state.parse() {
        response.headers_mut().append(header::SET_COOKIE, value);
    }
    response
}

// ============================================================================
// Sign Out
// ============================================================================

/// GET /logout
pub async fn sign_out<U, S, P>(
    State(state): State<AuthAppState<U, S, P>>,
    headers: HeaderMap,
) -> Response
where
    U: UserRepository + Send + Sync + 'static,
    S: AuthSessionRepository + HandshakeRepository + Send + Sync + 'static,
    P: IdentityProvider + Send + Sync + 'static,
{
    if let Some(token) = extract_cookie(&headers, &state.config.session_cookie_name) {
        let use_case = SignOutUseCase::new(state.sessions.clone(), state.config.clone());
        // Ignore errors - just clear the cookie
        if let Err(e) = use_case.execute(&token).await {
            e.log();
        }
    }

    let cookie = session_cookie(&state.config).build_delete_cookie();

    ([(header::SET_COOKIE, cookie)], Redirect::to("/")).into_response()
}

// ============================================================================
// Helpers
// ============================================================================

fn external_use_case<U, S, P>(state: &AuthAppState<U, S, P>) -> ExternalSignInUseCase<U, S, P>
where
    U: UserRepository + Send + Sync + 'static,
    S: AuthSessionRepository + HandshakeRepository + Send + Sync + 'static,
    P: IdentityProvider + Send + Sync + 'static,
{
    ExternalSignInUseCase::new(
        state.users.clone(),
        state.sessions.clone(),
        state.provider.clone(),
        state.config.clone(),
    )
}

/// Session cookie attributes derived from config
pub fn session_cookie(config: &AuthConfig) -> CookieConfig {
    CookieConfig {
        name: config.session_cookie_name.clone(),
        secure: config.cookie_secure,
        http_only: true,
        same_site: config.cookie_same_site,
        path: "/".to_string(),
        max_age_secs: Some(config.session_ttl_secs()),
    }
}

/// Lax so the cookie survives the top-level redirect back from the provider
fn oauth_state_cookie(config: &AuthConfig) -> CookieConfig {
    CookieConfig {
        name: OAUTH_STATE_COOKIE.to_string(),
        secure: config.cookie_secure,
        http_only: true,
        same_site: platform::cookie::SameSite::Lax,
        path: "/".to_string(),
        max_age_secs: Some(600),
    }
}

fn signed_in(config: &AuthConfig, token: &str) -> Response {
    let cookie = session_cookie(config).build_set_cookie(token);
    ([(header::SET_COOKIE, cookie)], Redirect::to("/secrets")).into_response()
}

fn redirect_on_client_error(err: AuthError, target: &str) -> Response {
    if err.is_server_error() {
        return err.into_response();
    }
    err.log();
    Redirect::to(target).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_session_cookie_attributes() {
        let config = AuthConfig::development();
        let cookie = session_cookie(&config).build_set_cookie("token");

        assert!(cookie.starts_with("secrets_session=token"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(cookie.contains("Path=/"));
        assert!(cookie.contains("Max-Age=86400"));
        assert!(!cookie.contains("Secure"));
    }

    #[test]
    fn test_secure_flag_follows_config() {
        let config = AuthConfig {
            cookie_secure: true,
            ..AuthConfig::development()
        };
        assert!(session_cookie(&config).build_set_cookie("t").contains("Secure"));
    }

    #[test]
    fn test_client_error_redirects() {
        let response = redirect_on_client_error(AuthError::UserNameTaken, "/register");
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/register");
    }

    #[test]
    fn test_server_error_is_500() {
        let response = redirect_on_client_error(AuthError::Internal("x".into()), "/register");
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
