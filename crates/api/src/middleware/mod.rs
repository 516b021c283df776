//! Authentication middleware extractors.
//!
//! - [`auth::AuthUser`] -- Resolves the account behind a JWT Bearer token.

pub mod auth;
