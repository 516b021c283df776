//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Read methods are the
//! aggregation/query service; the few inserts exist for provisioning and
//! seeding.

pub mod account_repo;
pub mod action_repo;
pub mod agent_repo;
pub mod client_repo;
pub mod event_repo;
pub mod sentiment_repo;

pub use account_repo::AccountRepo;
pub use action_repo::ActionRepo;
pub use agent_repo::AgentRepo;
pub use client_repo::ClientRepo;
pub use event_repo::EventRepo;
pub use sentiment_repo::SentimentRepo;
