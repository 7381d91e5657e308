//! Form and query DTOs

use serde::Deserialize;

/// Body of `POST /register` and `POST /login`
///
/// Missing fields deserialize as empty strings so the use case decides.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CredentialsForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Query string of the OAuth callback
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OAuthCallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
}
