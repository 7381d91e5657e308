//! Google OAuth 2.0 Identity Provider
//!
//! Authorization-code flow with PKCE (S256). Requests the `profile` scope only;
//! the account is identified by the userinfo `sub` claim.

use oauth2::basic::BasicClient;
use oauth2::{
    AuthUrl, AuthorizationCode, ClientId, ClientSecret, CsrfToken, EndpointNotSet, EndpointSet,
    PkceCodeChallenge, PkceCodeVerifier, RedirectUrl, Scope, TokenResponse, TokenUrl,
};
use serde::Deserialize;

use crate::application::config::GoogleOAuthConfig;
use crate::domain::provider::{AuthorizationRequest, ExternalProfile, IdentityProvider};
use crate::domain::value_object::google_id::GoogleId;
use crate::error::{AuthError, AuthResult};

/// OAuth client type with auth URL and token URL set
type ConfiguredClient = oauth2::Client<
    oauth2::basic::BasicErrorResponse,
    oauth2::basic::BasicTokenResponse,
    oauth2::basic::BasicTokenIntrospectionResponse,
    oauth2::StandardRevocableToken,
    oauth2::basic::BasicRevocationErrorResponse,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Subset of the OpenID userinfo response
#[derive(Debug, Deserialize)]
struct GoogleUserInfo {
    sub: String,
}

pub struct GoogleOAuth {
    client: ConfiguredClient,
    http: reqwest::Client,
    userinfo_url: String,
}

impl GoogleOAuth {
    pub fn new(config: &GoogleOAuthConfig) -> AuthResult<Self> {
        let invalid = |what: &str, e: oauth2::url::ParseError| {
            AuthError::Internal(format!("Invalid Google {what} URL: {e}"))
        };

        let client = BasicClient::new(ClientId::new(config.client_id.clone()))
            .set_client_secret(ClientSecret::new(config.client_secret.clone()))
            .set_auth_uri(AuthUrl::new(config.auth_url.clone()).map_err(|e| invalid("auth", e))?)
            .set_token_uri(
                TokenUrl::new(config.token_url.clone()).map_err(|e| invalid("token", e))?,
            )
            .set_redirect_uri(
                RedirectUrl::new(config.redirect_url.clone())
                    .map_err(|e| invalid("redirect", e))?,
            );

        // Token endpoint must not be allowed to redirect (SSRF)
        let http = reqwest::ClientBuilder::new()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| AuthError::Internal(format!("HTTP client: {e}")))?;

        Ok(Self {
            client,
            http,
            userinfo_url: config.userinfo_url.clone(),
        })
    }
}

impl IdentityProvider for GoogleOAuth {
    fn authorize(&self) -> AuthResult<AuthorizationRequest> {
        let (pkce_challenge, pkce_verifier) = PkceCodeChallenge::new_random_sha256();

        let (url, csrf_state) = self
            .client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("profile".to_string()))
            .set_pkce_challenge(pkce_challenge)
            .url();

        Ok(AuthorizationRequest {
            url: url.to_string(),
            state: csrf_state.secret().clone(),
            pkce_verifier: pkce_verifier.secret().clone(),
        })
    }

    async fn exchange(&self, code: &str, pkce_verifier: &str) -> AuthResult<ExternalProfile> {
        let token = self
            .client
            .exchange_code(AuthorizationCode::new(code.to_string()))
            .set_pkce_verifier(PkceCodeVerifier::new(pkce_verifier.to_string()))
            .request_async(&self.http)
            .await
            .map_err(|e| AuthError::HandshakeFailed(format!("token exchange: {e}")))?;

        let info: GoogleUserInfo = self
            .http
            .get(&self.userinfo_url)
            .bearer_auth(token.access_token().secret())
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| AuthError::HandshakeFailed(format!("userinfo request: {e}")))?
            .json()
            .await
            .map_err(|e| AuthError::HandshakeFailed(format!("userinfo body: {e}")))?;

        let subject = GoogleId::new(info.sub)
            .ok_or_else(|| AuthError::HandshakeFailed("userinfo without subject".into()))?;

        Ok(ExternalProfile { subject })
    }
}
