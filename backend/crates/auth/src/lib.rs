//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository and provider traits
//! - `application/` - Use cases and configuration
//! - `infra/` - Postgres user store, in-memory sessions, Google OAuth
//! - `presentation/` - HTTP handlers, forms, views, router, middleware
//!
//! ## Features
//! - Local registration and sign-in with user name + password
//! - Google sign-in (authorization code + PKCE), users found or created by Google id
//! - Server-side sessions referenced by a signed cookie
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, optional pepper
//! - Session cookie is `<uuid>.<HMAC-SHA256>`, HttpOnly, SameSite=Lax
//! - Sessions hold only the user id; the user is re-read on every request
//! - OAuth state is checked against both a cookie and a server-side record

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::{AuthConfig, GoogleOAuthConfig};
pub use error::{AuthError, AuthResult};
pub use infra::{GoogleOAuth, MemorySessionStore, MemoryUserRepository, PgAuthRepository};
pub use presentation::middleware::{CurrentUser, require_auth_session};
pub use presentation::router::{auth_guard_state, auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::{
        auth_session::AuthSession,
        handshake::PendingHandshake,
        user::{Credentials, User},
    };
    pub use crate::domain::value_object::{
        google_id::GoogleId,
        user_id::UserId,
        user_name::UserName,
        user_password::{RawPassword, UserPassword},
    };
    pub use crate::presentation::dto::*;
}

pub mod store {
    pub use crate::domain::repository::{
        AuthSessionRepository, HandshakeRepository, UserRepository,
    };
    pub use crate::infra::memory::{MemorySessionStore, MemoryUserRepository};
}

pub mod provider {
    pub use crate::domain::provider::*;
}
