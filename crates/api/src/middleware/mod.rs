//! Request-level guards: JWT authentication and project membership.

pub mod access;
pub mod auth;
