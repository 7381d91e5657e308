//! Google Subject Identifier
//!
//! The opaque `sub` claim Google returns for an account. Stable per account and
//! unique across the users table.

use derive_more::Display;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub struct GoogleId(String);

impl GoogleId {
    /// `None` for a blank subject
    pub fn new(subject: impl Into<String>) -> Option<Self> {
        let subject = subject.into();
        let subject = subject.trim();
        (!subject.is_empty()).then(|| Self(subject.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
