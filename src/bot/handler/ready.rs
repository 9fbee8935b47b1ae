//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway and completes the initial handshake. The handler
//! sets the bot's presence and registers its slash commands.

use serenity::all::{ActivityData, Context, GuildId, Ready};

use crate::bot::command;

/// Custom status shown while the bot is online.
pub const PRESENCE_STATUS: &str = "Chillin' and Vibin'";

/// Handles the ready event when the bot connects to Discord.
///
/// Fires on every (re)connection, so command registration is repeated each time; Discord
/// treats re-registering an unchanged command set as a no-op.
///
/// # Arguments
/// - `ctx` - Discord context for setting activity status and registering commands
/// - `ready` - Ready event data containing bot user information
/// - `dev_guild_id` - Guild that also receives guild-scoped commands, if configured
pub async fn handle_ready(ctx: Context, ready: Ready, dev_guild_id: Option<GuildId>) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    ctx.set_activity(Some(ActivityData::custom(PRESENCE_STATUS)));

    if let Err(e) = command::register_commands(&ctx.http, dev_guild_id).await {
        tracing::error!("Failed to register slash commands: {}", e);
    }
}
