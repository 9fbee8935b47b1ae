//! `/showmessage`: a message's current content together with its recorded edits.

use std::sync::Arc;

use serenity::all::{
    ChannelId, ChannelType, CommandInteraction, CommandOptionType, Context, CreateCommand,
    CreateCommandOption, EditInteractionResponse, MessageId,
};

use crate::bot::command::{channel_option, string_option};
use crate::bot::embed::report_embed;
use crate::data::edit_log::EditLogStore;
use crate::error::{command::CommandError, AppError};
use crate::service::edit_report::EditReportService;

pub const NAME: &str = "showmessage";

pub const REPORT_INTRO: &str = "Here's the message content (including edits if any):";
pub const FETCH_FAILED: &str = "❌ Could not fetch the message. Check the ID and channel.";
pub const HISTORY_FAILED: &str = "❌ Could not load the edit history for that message.";
pub const UNSUPPORTED_CHANNEL: &str =
    "❌ You can only fetch messages from text channels, threads or DMs.";

/// Channel kinds that hold messages.
const MESSAGE_CHANNEL_TYPES: [ChannelType; 9] = [
    ChannelType::Text,
    ChannelType::News,
    ChannelType::NewsThread,
    ChannelType::PublicThread,
    ChannelType::PrivateThread,
    ChannelType::Voice,
    ChannelType::Stage,
    ChannelType::Private,
    ChannelType::GroupDm,
];

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Show a message's content along with its edit history")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "id", "ID of the message")
                .required(true),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Channel,
                "channel",
                "Channel the message is in (defaults to this channel)",
            )
            .channel_types(MESSAGE_CHANNEL_TYPES.to_vec())
            .required(false),
        )
}

/// Replies ephemerally with the edit report of the requested message.
///
/// The reply is deferred first since fetching the message and reading the edit log
/// can outlast Discord's three second interaction deadline.
pub async fn handle(
    store: &Arc<dyn EditLogStore>,
    ctx: &Context,
    interaction: &CommandInteraction,
) -> Result<(), AppError> {
    interaction.defer_ephemeral(&ctx.http).await?;

    let response = match resolve_target(interaction) {
        Ok((channel_id, message_id)) => build_response(store, ctx, channel_id, message_id).await,
        Err(e) => {
            tracing::debug!("Rejected /{} from {}: {}", NAME, interaction.user.name, e);
            EditInteractionResponse::new().content(rejection_reply(&e))
        }
    };

    interaction.edit_response(&ctx.http, response).await?;

    Ok(())
}

async fn build_response(
    store: &Arc<dyn EditLogStore>,
    ctx: &Context,
    channel_id: ChannelId,
    message_id: MessageId,
) -> EditInteractionResponse {
    let message = match channel_id.message(ctx, message_id).await {
        Ok(message) => message,
        Err(e) => {
            tracing::debug!(
                "Failed to fetch message {} in channel {}: {}",
                message_id,
                channel_id,
                e
            );
            return EditInteractionResponse::new().content(FETCH_FAILED);
        }
    };

    let report = match EditReportService::new(store)
        .render_report(
            &message.id.to_string(),
            &message.content,
            &message.author.tag(),
            message.timestamp.to_utc(),
        )
        .await
    {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("Failed to load edit history of message {}: {}", message.id, e);
            return EditInteractionResponse::new().content(HISTORY_FAILED);
        }
    };

    EditInteractionResponse::new()
        .content(REPORT_INTRO)
        .embed(report_embed(&report, Some(message.author.face())))
}

/// Resolves the channel and message the command points at.
///
/// Without a channel option the channel the command was used in is searched.
fn resolve_target(interaction: &CommandInteraction) -> Result<(ChannelId, MessageId), CommandError> {
    let options = interaction.data.options();

    let message_id = parse_message_id(string_option(&options, "id")?)?;

    let channel_id = match channel_option(&options, "channel") {
        Some(channel) if !is_message_channel(channel.kind) => {
            return Err(CommandError::UnsupportedChannel)
        }
        Some(channel) => channel.id,
        None => interaction.channel_id,
    };

    Ok((channel_id, message_id))
}

/// Whether a channel of this kind can contain messages.
pub fn is_message_channel(kind: ChannelType) -> bool {
    MESSAGE_CHANNEL_TYPES.contains(&kind)
}

/// Parses a message ID given as text.
///
/// Discord snowflakes are non-zero unsigned 64-bit integers.
pub fn parse_message_id(raw: &str) -> Result<MessageId, CommandError> {
    match raw.trim().parse::<u64>() {
        Ok(id) if id != 0 => Ok(MessageId::new(id)),
        _ => Err(CommandError::InvalidMessageId(raw.to_string())),
    }
}

/// User-facing reply for input rejected before any lookup.
///
/// An unparseable ID gets the same reply as a message that could not be fetched.
fn rejection_reply(error: &CommandError) -> String {
    match error {
        CommandError::UnsupportedChannel => UNSUPPORTED_CHANNEL.to_string(),
        CommandError::InvalidMessageId(_) => FETCH_FAILED.to_string(),
        other => format!("❌ {}", other),
    }
}
