//! Request extractors guarding the admin surface.

pub mod auth;
pub mod rbac;
