//! Discord bot: gateway event handling and slash commands.
//!
//! The bot watches message updates and feeds them to the edit tracker, and serves the
//! `/showmessage` report built from the recorded history. Everything Discord-specific lives
//! under this module; the services it calls only see plain strings and timestamps.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive guild and channel availability
//! - `GUILD_MESSAGES` - Receive message create/update events in guilds
//! - `DIRECT_MESSAGES` - Receive message create/update events in DMs
//! - `MESSAGE_CONTENT` - Read message content (privileged intent)
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application. Without it the content of
//! update events is empty and no edits are recorded.

pub mod command;
pub mod embed;
pub mod handler;
pub mod start;
