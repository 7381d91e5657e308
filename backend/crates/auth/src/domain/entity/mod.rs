//! Entity Module

pub mod auth_session;
pub mod handshake;
pub mod user;
