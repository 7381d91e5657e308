//! Infrastructure Layer
//!
//! Postgres user store, in-memory session table, Google OAuth client.

pub mod google;
pub mod memory;
pub mod postgres;

pub use google::GoogleOAuth;
pub use memory::{MemorySessionStore, MemoryUserRepository};
pub use postgres::PgAuthRepository;
