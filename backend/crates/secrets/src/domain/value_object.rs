//! Secret Value Object
//!
//! Free text a user shares anonymously. Trimmed; must be non-empty and at
//! most [`SECRET_MAX_LENGTH`] characters.

use std::fmt;

pub const SECRET_MAX_LENGTH: usize = 2000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SecretTextError {
    #[error("Secret cannot be empty")]
    Empty,

    #[error("Secret must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },
}

#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, SecretTextError> {
        let trimmed = raw.as_ref().trim();

        if trimmed.is_empty() {
            return Err(SecretTextError::Empty);
        }

        let char_count = trimmed.chars().count();
        if char_count > SECRET_MAX_LENGTH {
            return Err(SecretTextError::TooLong {
                max: SECRET_MAX_LENGTH,
                actual: char_count,
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Text stays out of logs
impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secret({} chars)", self.0.chars().count())
    }
}
