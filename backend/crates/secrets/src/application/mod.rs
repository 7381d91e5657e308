//! Application Layer

pub mod list_secrets;
pub mod submit_secret;

pub use list_secrets::ListSecretsUseCase;
pub use submit_secret::{SubmitSecretInput, SubmitSecretUseCase};
