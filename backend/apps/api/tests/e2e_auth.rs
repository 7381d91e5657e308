//! End-to-end authentication flows through the full router

mod common;

use axum::http::StatusCode;
use common::{TestApp, body_text, location, set_cookie};

#[tokio::test]
async fn test_register_then_submit_page_is_reachable() {
    let app = TestApp::new();
    let cookie = app.register("alice@example.com", "Password123!").await;

    let response = app.get("/submit", Some(&cookie)).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains(r#"action="/submit""#));
}

#[tokio::test]
async fn test_authenticated_request_refreshes_session_cookie() {
    let app = TestApp::new();
    let cookie = app.register("erin", "Password123!").await;

    let response = app.get("/submit", Some(&cookie)).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(set_cookie(&response, "secrets_session"), Some(cookie));
    let header = response
        .headers()
        .get(axum::http::header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap();
    assert!(header.contains("Max-Age=86400"));
}

#[tokio::test]
async fn test_duplicate_registration_redirects_back() {
    let app = TestApp::new();
    app.register("alice@example.com", "Password123!").await;

    let response = app
        .post_form(
            "/register",
            "username=ALICE@example.com&password=Another123!",
            None,
        )
        .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/register"));
    assert!(set_cookie(&response, "secrets_session").is_none());
    assert_eq!(app.users.len().await, 1);
}

#[tokio::test]
async fn test_invalid_registration_redirects_back() {
    let app = TestApp::new();

    let response = app
        .post_form("/register", "username=bob&password=short", None)
        .await;

    assert_eq!(location(&response), Some("/register"));
    assert!(app.users.is_empty().await);
}

#[tokio::test]
async fn test_login_with_correct_password() {
    let app = TestApp::new();
    app.register("carol", "Password123!").await;

    let response = app
        .post_form("/login", "username=carol&password=Password123!", None)
        .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/secrets"));
    let cookie = set_cookie(&response, "secrets_session").unwrap();
    assert_eq!(app.get("/submit", Some(&cookie)).await.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_login_with_wrong_password_establishes_no_session() {
    let app = TestApp::new();
    app.register("carol", "Password123!").await;
    let sessions_before = app.sessions.session_count().await;

    let response = app
        .post_form("/login", "username=carol&password=WrongPassword!", None)
        .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/login"));
    assert!(set_cookie(&response, "secrets_session").is_none());
    assert_eq!(app.sessions.session_count().await, sessions_before);
}

#[tokio::test]
async fn test_google_login_creates_one_user_and_reuses_it() {
    let app = TestApp::new();

    let first = app.google_login("110169484474386276334").await;
    assert!(first.is_some());
    assert_eq!(app.users.len().await, 1);

    let second = app.google_login("110169484474386276334").await;
    assert!(second.is_some());
    assert_eq!(app.users.len().await, 1);

    app.google_login("another-subject").await.unwrap();
    assert_eq!(app.users.len().await, 2);
}

#[tokio::test]
async fn test_google_callback_without_state_cookie_fails() {
    let app = TestApp::new();
    let begin = app.get("/auth/google", None).await;
    let state_cookie = set_cookie(&begin, "oauth_state").unwrap();
    let state = state_cookie.split_once('=').unwrap().1;

    let response = app
        .get(
            &format!("/auth/google/secrets?code=code-123&state={state}"),
            None,
        )
        .await;

    assert_eq!(location(&response), Some("/login"));
    assert!(set_cookie(&response, "secrets_session").is_none());
    assert!(app.users.is_empty().await);
}

#[tokio::test]
async fn test_google_access_denied_redirects_to_login() {
    let app = TestApp::new();

    let response = app
        .get("/auth/google/secrets?error=access_denied", None)
        .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/login"));
}

#[tokio::test]
async fn test_logout_then_submit_redirects_to_login() {
    let app = TestApp::new();
    let cookie = app.register("dave", "Password123!").await;

    let response = app.get("/logout", Some(&cookie)).await;
    assert_eq!(location(&response), Some("/"));
    assert_eq!(app.sessions.session_count().await, 0);

    // The browser would have dropped it; replaying must fail anyway
    let response = app.get("/submit", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/login"));
}

#[tokio::test]
async fn test_public_pages() {
    let app = TestApp::new();

    for path in ["/", "/login", "/register", "/secrets"] {
        let response = app.get(path, None).await;
        assert_eq!(response.status(), StatusCode::OK, "{path}");
    }

    assert_eq!(
        app.get("/no-such-page", None).await.status(),
        StatusCode::NOT_FOUND
    );
}
