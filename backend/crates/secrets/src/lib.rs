//! Secrets Backend Module
//!
//! Anonymous secrets shared by signed-in users.
//!
//! - `GET /secrets` lists every non-empty secret, without authors
//! - `GET|POST /submit` lets the current user replace their own secret
//!
//! Storage reuses the `users` table; the current user comes from
//! `auth::require_auth_session`.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


pub use error::{SecretError, SecretResult};
pub use infra::PgSecretRepository;
pub use presentation::router::{secrets_router, secrets_router_generic};
