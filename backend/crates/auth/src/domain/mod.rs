//! Domain Layer
//!
//! Entities, value objects, repository and provider traits.

pub mod entity;
pub mod provider;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{
    auth_session::AuthSession,
    handshake::PendingHandshake,
    user::{Credentials, User},
};
pub use provider::{AuthorizationRequest, ExternalProfile, IdentityProvider};
pub use repository::{AuthSessionRepository, HandshakeRepository, UserRepository};
