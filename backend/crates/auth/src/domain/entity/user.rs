//! User Entity
//!
//! A person known to the system, with either local credentials, a Google
//! identity, or both. Users are never deleted.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    google_id::GoogleId, user_id::UserId, user_name::UserName, user_password::UserPassword,
};

/// How a user can authenticate
///
/// At least one of a local credential and an external id is always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Registered with a user name and password
    Local {
        user_name: UserName,
        password: UserPassword,
    },
    /// Created by a first Google sign-in
    External { google_id: GoogleId },
    /// Both; only reachable from stored data
    Linked {
        user_name: UserName,
        password: UserPassword,
        google_id: GoogleId,
    },
}

impl Credentials {
    /// Rebuild from nullable storage columns
    ///
    /// Returns `None` for a row that has neither credential.
    pub fn from_parts(
        local: Option<(UserName, UserPassword)>,
        google_id: Option<GoogleId>,
    ) -> Option<Self> {
        match (local, google_id) {
            (Some((user_name, password)), None) => Some(Self::Local {
                user_name,
                password,
            }),
            (None, Some(google_id)) => Some(Self::External { google_id }),
            (Some((user_name, password)), Some(google_id)) => Some(Self::Linked {
                user_name,
                password,
                google_id,
            }),
            (None, None) => None,
        }
    }

    pub fn user_name(&self) -> Option<&UserName> {
        match self {
            Self::Local { user_name, .. } | Self::Linked { user_name, .. } => Some(user_name),
            Self::External { .. } => None,
        }
    }

    pub fn password(&self) -> Option<&UserPassword> {
        match self {
            Self::Local { password, .. } | Self::Linked { password, .. } => Some(password),
            Self::External { .. } => None,
        }
    }

    pub fn google_id(&self) -> Option<&GoogleId> {
        match self {
            Self::External { google_id } | Self::Linked { google_id, .. } => Some(google_id),
            Self::Local { .. } => None,
        }
    }
}

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    pub user_id: UserId,
    pub credentials: Credentials,
    /// Latest submitted secret, if any
    pub secret: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// New locally registered user
    pub fn local(user_name: UserName, password: UserPassword) -> Self {
        Self::with_credentials(Credentials::Local {
            user_name,
            password,
        })
    }

    /// New user known only by a Google account
    pub fn external(google_id: GoogleId) -> Self {
        Self::with_credentials(Credentials::External { google_id })
    }

    fn with_credentials(credentials: Credentials) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            credentials,
            secret: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn user_name(&self) -> Option<&UserName> {
        self.credentials.user_name()
    }

    pub fn google_id(&self) -> Option<&GoogleId> {
        self.credentials.google_id()
    }

    /// Replace the stored secret
    pub fn set_secret(&mut self, secret: impl Into<String>) {
        self.secret = Some(secret.into());
        self.updated_at = Utc::now();
    }

    /// Secret if present and non-empty
    pub fn visible_secret(&self) -> Option<&str> {
        self.secret.as_deref().filter(|s| !s.is_empty())
    }
}
