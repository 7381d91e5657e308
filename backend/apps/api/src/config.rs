//! Server configuration from environment variables
//!
//! `.env` is loaded by `main` before this runs. Values are read through a
//! lookup function so tests never touch the process environment.

use std::net::SocketAddr;

use auth::{AuthConfig, GoogleOAuthConfig};
use base64::Engine;
use base64::engine::general_purpose;
use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_CALLBACK_URL: &str = "http://localhost:3000/auth/google/secrets";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub auth: AuthConfig,
    pub google: GoogleOAuthConfig,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let database_url = required("DATABASE_URL")?;

        let bind_addr: SocketAddr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                name: "BIND_ADDR",
                reason: e.to_string(),
            })?;

        let session_secret = match lookup("SESSION_SECRET") {
            Some(encoded) => decode_secret(&encoded)?,
            None if cfg!(debug_assertions) => {
                tracing::warn!("SESSION_SECRET not set, using a random key; sessions end on restart");
                platform::crypto::random_key()
            }
            None => return Err(ConfigError::Missing("SESSION_SECRET")),
        };

        let cookie_secure = match lookup("COOKIE_SECURE") {
            Some(value) => parse_bool("COOKIE_SECURE", &value)?,
            None => !cfg!(debug_assertions),
        };

        let auth = AuthConfig {
            session_secret,
            cookie_secure,
            password_pepper: lookup("PASSWORD_PEPPER")
                .filter(|p| !p.is_empty())
                .map(String::into_bytes),
            ..AuthConfig::default()
        };

        let google = GoogleOAuthConfig::new(
            required("CLIENT_ID")?,
            required("CLIENT_SECRET")?,
            lookup("CALLBACK_URL").unwrap_or_else(|| DEFAULT_CALLBACK_URL.to_string()),
        );

        Ok(Self {
            database_url,
            bind_addr,
            auth,
            google,
        })
    }
}

/// Base64 (standard alphabet) encoding of exactly 32 bytes
fn decode_secret(encoded: &str) -> Result<[u8; 32], ConfigError> {
    let invalid = |reason: String| ConfigError::Invalid {
        name: "SESSION_SECRET",
        reason,
    };

    let bytes = general_purpose::STANDARD
        .decode(encoded.trim())
        .map_err(|e| invalid(e.to_string()))?;

    bytes
        .try_into()
        .map_err(|b: Vec<u8>| invalid(format!("expected 32 bytes, got {}", b.len())))
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::Invalid {
            name,
            reason: format!("expected a boolean, got {other:?}"),
        }),
    }
}
