//! Shared domain types for the sentiment reporting backend.
//!
//! - [`types`] -- primary key and timestamp aliases used by every crate.
//! - [`error`] -- the domain error taxonomy mapped to HTTP at the API edge.
//! - [`sentiment`] -- label vocabulary, id validation and query windows.

pub mod error;
pub mod sentiment;
pub mod types;
