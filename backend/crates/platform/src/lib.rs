//! Platform Crate - Technical Infrastructure
//!
//! Shared technical building blocks with no business meaning:
//! - Password hashing (Argon2id) with input normalization
//! - HMAC-SHA256 signing and base64url helpers
//! - Cookie building and parsing
//! - Inline HTML layout and escaping for server-rendered pages

pub mod cookie;
pub mod crypto;
pub mod html;
pub mod password;
