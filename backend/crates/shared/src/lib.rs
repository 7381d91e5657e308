//! Shared Kernel
//!
//! Vocabulary shared by every bounded context of the secrets service:
//! - The unified [`error::app_error::AppError`] and its [`error::kind::ErrorKind`]
//! - Typed UUID identifiers ([`id::Id`])
//!
//! Only things with the same meaning in `auth` and `secrets` belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
