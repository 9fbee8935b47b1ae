//! Service layer for edit tracking business logic.
//!
//! Services sit between the bot's event and command handlers and the edit log store:
//!
//! - **Edit tracking** (`edit_tracker`): decides which message updates are recorded
//! - **Edit reports** (`edit_report`): renders a message's history as a bounded report

pub mod edit_report;
pub mod edit_tracker;
