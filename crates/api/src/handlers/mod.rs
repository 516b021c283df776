//! Request handlers.
//!
//! Handlers delegate to the repositories in `sentiment_db` or to the publish
//! gateway, and map errors via [`crate::error::AppError`].

pub mod analysis;
pub mod auth;
pub mod people;
pub mod sentiment;
