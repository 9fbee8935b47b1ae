//! Domain models.
//!
//! Models here are independent of both the database entities and the Serenity types;
//! conversion happens at the repository boundary (`from_entity`) and in the bot layer.

pub mod activity;
pub mod edit;
pub mod report;
