//! Domain Layer

pub mod repository;
pub mod value_object;

pub use repository::SecretRepository;
pub use value_object::{SECRET_MAX_LENGTH, Secret, SecretTextError};
