//! Admin credentials: password hashes and session tokens.

pub mod jwt;
pub mod password;
