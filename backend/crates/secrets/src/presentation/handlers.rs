//! HTTP Handlers

use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::{Extension, Form};
use std::sync::Arc;

use auth::CurrentUser;

use crate::application::{ListSecretsUseCase, SubmitSecretInput, SubmitSecretUseCase};
use crate::domain::repository::SecretRepository;
use crate::error::SecretError;
use crate::presentation::dto::SubmitSecretForm;
use crate::presentation::views;

pub struct SecretsAppState<R>
where
    R: SecretRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

impl<R> Clone for SecretsAppState<R>
where
    R: SecretRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
        }
    }
}

/// GET /secrets
pub async fn list_secrets<R>(State(state): State<SecretsAppState<R>>) -> Response
where
    R: SecretRepository + Send + Sync + 'static,
{
    match ListSecretsUseCase::new(state.repo.clone()).execute().await {
        Ok(secrets) => Html(views::secrets_page(&secrets)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// GET /submit
pub async fn submit_page() -> Html<String> {
    Html(views::submit_page())
}

/// POST /submit
pub async fn submit_secret<R>(
    State(state): State<SecretsAppState<R>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Form(form): Form<SubmitSecretForm>,
) -> Response
where
    R: SecretRepository + Send + Sync + 'static,
{
    let input = SubmitSecretInput {
        user_id: user.user_id,
        text: form.secret,
    };

    match SubmitSecretUseCase::new(state.repo.clone()).execute(input).await {
        Ok(()) => Redirect::to("/secrets").into_response(),
        Err(e @ SecretError::InvalidSecret(_)) => {
            e.log();
            Redirect::to("/submit").into_response()
        }
        Err(e @ SecretError::UserNotFound) => {
            e.log();
            Redirect::to("/login").into_response()
        }
        Err(e) => e.into_response(),
    }
}
