//! User ID
//!
//! Defined in the kernel because the `secrets` context keys on it too.

pub use kernel::id::UserId;
