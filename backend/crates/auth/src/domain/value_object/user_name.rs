//! User Name Value Object
//!
//! The name a local account signs in with. The registration form labels it
//! as an e-mail address, but any printable handle is accepted.
//!
//! ## Processing order
//! NFKC normalization → trim → validation → lowercase canonical form
//!
//! ## Invariants
//! - Length: 1..=254 characters after normalization
//! - No whitespace or control characters
//! - Uniqueness is decided on the canonical (lowercase) form

use std::fmt;
use unicode_normalization::UnicodeNormalization;

/// Maximum length (RFC 5321 path limit, so e-mail addresses always fit)
pub const USER_NAME_MAX_LENGTH: usize = 254;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserNameError {
    #[error("User name cannot be empty")]
    Empty,

    #[error("User name must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    #[error("User name cannot contain whitespace or control characters")]
    InvalidCharacter,
}

/// Validated user name
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct UserName {
    /// As entered (normalized and trimmed)
    original: String,
    /// Lowercase form used for lookups
    canonical: String,
}

impl UserName {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, UserNameError> {
        let normalized: String = raw.as_ref().nfkc().collect();
        let trimmed = normalized.trim();

        if trimmed.is_empty() {
            return Err(UserNameError::Empty);
        }

        let char_count = trimmed.chars().count();
        if char_count > USER_NAME_MAX_LENGTH {
            return Err(UserNameError::TooLong {
                max: USER_NAME_MAX_LENGTH,
                actual: char_count,
            });
        }

        if trimmed
            .chars()
            .any(|ch| ch.is_whitespace() || ch.is_control())
        {
            return Err(UserNameError::InvalidCharacter);
        }

        Ok(Self {
            original: trimmed.to_string(),
            canonical: trimmed.to_lowercase(),
        })
    }

    /// Rebuild from stored columns without re-validating
    pub(crate) fn from_stored(original: String, canonical: String) -> Self {
        Self {
            original,
            canonical,
        }
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    pub fn as_str(&self) -> &str {
        &self.canonical
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

impl fmt::Debug for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UserName").field(&self.original).finish()
    }
}
