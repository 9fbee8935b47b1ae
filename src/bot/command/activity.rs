//! `/activity`: lets the application owner change the bot's presence.

use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CurrentApplicationInfo, ResolvedOption, UserId,
};

use crate::bot::command::{respond, string_option};
use crate::error::{command::CommandError, AppError};
use crate::model::activity::ActivityKind;

pub const NAME: &str = "activity";

pub const NOT_OWNER: &str = "❌ Only the bot owner can use this command.";

pub fn register() -> CreateCommand {
    let mut kind = CreateCommandOption::new(CommandOptionType::String, "type", "Activity type")
        .required(true);
    for choice in ActivityKind::ALL {
        kind = kind.add_string_choice(choice.label(), choice.as_value());
    }

    CreateCommand::new(NAME)
        .description("Change the bot's activity status (owner only)")
        .add_option(kind)
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "text", "Activity text")
                .required(true),
        )
}

/// Sets the presence requested by the application owner. Every reply is ephemeral.
pub async fn handle(ctx: &Context, interaction: &CommandInteraction) -> Result<(), AppError> {
    let info = ctx.http.get_current_application_info().await?;

    if owner_id(&info) != Some(interaction.user.id) {
        tracing::debug!(
            "Rejected /{} from non-owner {}",
            NAME,
            interaction.user.name
        );
        return respond(ctx, interaction, NOT_OWNER, true).await;
    }

    let options = interaction.data.options();

    let reply = match parse_request(&options) {
        Ok((kind, text)) => {
            ctx.set_activity(Some(kind.to_activity(text)));
            tracing::info!("Activity set to {} {}", kind.as_value(), text);
            status_reply(kind, text)
        }
        Err(e) => format!("❌ {}", e),
    };

    respond(ctx, interaction, reply, true).await
}

fn parse_request<'a>(
    options: &[ResolvedOption<'a>],
) -> Result<(ActivityKind, &'a str), CommandError> {
    let kind: ActivityKind = string_option(options, "type")?.parse()?;
    let text = string_option(options, "text")?;

    Ok((kind, text))
}

/// The user allowed to change the presence: the team owner for team-owned applications.
fn owner_id(info: &CurrentApplicationInfo) -> Option<UserId> {
    info.team
        .as_ref()
        .map(|team| team.owner_user_id)
        .or_else(|| info.owner.as_ref().map(|owner| owner.id))
}

pub fn status_reply(kind: ActivityKind, text: &str) -> String {
    format!("✅ Status updated to: **{} {}**", kind.as_value(), text)
}
