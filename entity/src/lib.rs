//! SeaORM entity models for the persistent edit log.
//!
//! One `message_edit_history` row exists per tracked Discord message and owns an
//! ordered set of `message_edit` rows, one per recorded edit. Row ids of
//! `message_edit` define chronological order.

pub mod prelude;

pub mod message_edit;
pub mod message_edit_history;
