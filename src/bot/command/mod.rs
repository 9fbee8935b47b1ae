//! Slash commands.
//!
//! Each command module exposes `NAME`, `register()` building its definition and `handle()`
//! answering an invocation. Handlers reply to the user for every expected failure and only
//! return `Err` when Discord itself could not be reached.

pub mod activity;
pub mod showmessage;

use std::sync::Arc;

use serenity::all::{
    Command, CommandInteraction, Context, CreateCommand, CreateInteractionResponse,
    CreateInteractionResponseMessage, GuildId, Http, PartialChannel, ResolvedOption,
    ResolvedValue,
};

use crate::data::edit_log::EditLogStore;
use crate::error::{command::CommandError, AppError};

/// Definitions of every command the bot serves.
pub fn commands() -> Vec<CreateCommand> {
    vec![showmessage::register(), activity::register(), test::register()]
}

/// Registers all commands globally, and in the development guild when one is configured.
///
/// Global commands can take up to an hour to propagate; guild commands update
/// instantly, which is what the development guild is for.
pub async fn register_commands(
    http: &Arc<Http>,
    dev_guild_id: Option<GuildId>,
) -> Result<(), AppError> {
    let global = Command::set_global_commands(http, commands()).await?;
    tracing::info!("Registered {} global commands", global.len());

    if let Some(guild_id) = dev_guild_id {
        let guild = guild_id.set_commands(http, commands()).await?;
        tracing::info!(
            "Registered {} commands in development guild {}",
            guild.len(),
            guild_id
        );
    }

    Ok(())
}

/// Dispatches a slash command to its handler by name.
pub async fn handle_command(
    store: &Arc<dyn EditLogStore>,
    ctx: Context,
    interaction: &CommandInteraction,
) {
    let result = match interaction.data.name.as_str() {
        showmessage::NAME => showmessage::handle(store, &ctx, interaction).await,
        activity::NAME => activity::handle(&ctx, interaction).await,
        test::NAME => test::handle(&ctx, interaction).await,
        other => {
            tracing::warn!("Received unknown command /{}", other);
            Ok(())
        }
    };

    if let Err(e) = result {
        tracing::error!("Failed to handle /{}: {}", interaction.data.name, e);
    }
}

/// Answers an interaction directly with a text message.
pub(crate) async fn respond(
    ctx: &Context,
    interaction: &CommandInteraction,
    content: impl Into<String>,
    ephemeral: bool,
) -> Result<(), AppError> {
    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(content)
            .ephemeral(ephemeral),
    );
    interaction.create_response(&ctx.http, response).await?;

    Ok(())
}

/// Value of a required string option.
pub(crate) fn string_option<'a>(
    options: &[ResolvedOption<'a>],
    name: &str,
) -> Result<&'a str, CommandError> {
    options
        .iter()
        .find_map(|option| match option.value {
            ResolvedValue::String(value) if option.name == name => Some(value),
            _ => None,
        })
        .ok_or_else(|| CommandError::MissingOption(name.to_string()))
}

/// Value of an optional channel option.
pub(crate) fn channel_option<'a>(
    options: &[ResolvedOption<'a>],
    name: &str,
) -> Option<&'a PartialChannel> {
    options.iter().find_map(|option| match option.value {
        ResolvedValue::Channel(channel) if option.name == name => Some(channel),
        _ => None,
    })
}
