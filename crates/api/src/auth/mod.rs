//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- access-token configuration, issuance and validation.

pub mod jwt;
pub mod password;
