//! Shared harness for end-to-end router tests

#![allow(dead_code)]

use std::sync::Arc;

use api::build_router;
use auth::models::GoogleId;
use auth::provider::{AuthorizationRequest, ExternalProfile, IdentityProvider};
use auth::{AuthConfig, AuthError, AuthResult, MemorySessionStore, MemoryUserRepository};
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use tower::ServiceExt;

/// Identity provider that treats `code-<subject>` as a valid code for `<subject>`
pub struct StubProvider;

impl IdentityProvider for StubProvider {
    fn authorize(&self) -> AuthResult<AuthorizationRequest> {
        let state = platform::crypto::to_base64url(&platform::crypto::random_bytes(16));
        Ok(AuthorizationRequest {
            url: format!("https://accounts.test/authorize?scope=profile&state={state}"),
            state,
            pkce_verifier: "stub-verifier".to_string(),
        })
    }

    async fn exchange(&self, code: &str, _pkce_verifier: &str) -> AuthResult<ExternalProfile> {
        let subject = code
            .strip_prefix("code-")
            .and_then(GoogleId::new)
            .ok_or_else(|| AuthError::HandshakeFailed("rejected code".into()))?;

        Ok(ExternalProfile { subject })
    }
}

pub struct TestApp {
    pub router: Router,
    pub users: Arc<MemoryUserRepository>,
    pub sessions: Arc<MemorySessionStore>,
}

impl TestApp {
    pub fn new() -> Self {
        let users = Arc::new(MemoryUserRepository::new());
        let sessions = Arc::new(MemorySessionStore::new());
        let router = build_router(
            users.clone(),
            sessions.clone(),
            Arc::new(StubProvider),
            users.clone(),
            Arc::new(AuthConfig::development()),
        );

        Self {
            router,
            users,
            sessions,
        }
    }

    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> Response<Body> {
        let mut builder = Request::get(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }

    pub async fn post_form(&self, uri: &str, body: &str, cookie: Option<&str>) -> Response<Body> {
        let mut builder = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.send(builder.body(Body::from(body.to_string())).unwrap())
            .await
    }

    async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    /// Register and return the `name=value` session cookie
    pub async fn register(&self, user_name: &str, password: &str) -> String {
        let response = self
            .post_form(
                "/register",
                &format!("username={user_name}&password={password}"),
                None,
            )
            .await;
        assert_eq!(location(&response), Some("/secrets"));
        set_cookie(&response, "secrets_session").expect("session cookie")
    }

    /// Full Google round trip for `subject`, returning the session cookie
    pub async fn google_login(&self, subject: &str) -> Option<String> {
        let begin = self.get("/auth/google", None).await;
        let state_cookie = set_cookie(&begin, "oauth_state")?;
        let state = state_cookie.split_once('=')?.1.to_string();

        let callback = self
            .get(
                &format!("/auth/google/secrets?code=code-{subject}&state={state}"),
                Some(&state_cookie),
            )
            .await;
        set_cookie(&callback, "secrets_session")
    }

    pub async fn list_secrets(&self) -> String {
        body_text(self.get("/secrets", None).await).await
    }
}

pub fn location(response: &Response<Body>) -> Option<&str> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
}

/// `name=value` from the response's Set-Cookie for `name`, if it sets a value
pub fn set_cookie(response: &Response<Body>, name: &str) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|v| v.split(';').next())
        .find(|pair| {
            pair.split_once('=')
                .is_some_and(|(k, v)| k == name && !v.is_empty())
        })
        .map(str::to_string)
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
