//! Form DTOs

use serde::Deserialize;

/// Body of `POST /submit`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitSecretForm {
    #[serde(default)]
    pub secret: String,
}
