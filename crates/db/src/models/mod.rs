//! Row models and DTOs.
//!
//! Entity structs derive `FromRow` for the database side and `Serialize`
//! with the wire field names clients already consume (`acao_id`, `nome`,
//! `data_analise`, ...). Create DTOs are used by seeding code and tests;
//! this service never mutates people, events or actions itself.

pub mod account;
pub mod action;
pub mod agent;
pub mod client;
pub mod event;
pub mod sentiment;
