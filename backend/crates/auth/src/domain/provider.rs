//! External Identity Provider
//!
//! Seam between the sign-in use case and the OAuth 2.0 client, so tests can
//! swap Google for a stub.

use crate::domain::value_object::google_id::GoogleId;
use crate::error::AuthResult;

/// Where to send the browser, plus what must be remembered for the callback
#[derive(Debug, Clone)]
pub struct AuthorizationRequest {
    pub url: String,
    pub state: String,
    pub pkce_verifier: String,
}

/// Identity asserted by the provider after a successful exchange
#[derive(Debug, Clone)]
pub struct ExternalProfile {
    pub subject: GoogleId,
}

#[trait_variant::make(IdentityProvider: Send)]
pub trait LocalIdentityProvider {
    /// Build the authorize URL with a fresh state and PKCE challenge
    fn authorize(&self) -> AuthResult<AuthorizationRequest>;

    /// Redeem an authorization code and fetch the account profile
    async fn exchange(&self, code: &str, pkce_verifier: &str) -> AuthResult<ExternalProfile>;
}
