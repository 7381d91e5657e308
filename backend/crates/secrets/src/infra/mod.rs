//! Infrastructure Layer

pub mod memory;
pub mod postgres;

pub use postgres::PgSecretRepository;
