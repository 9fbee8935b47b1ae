use std::sync::Arc;

use serenity::all::{Context, Interaction};

use crate::bot::command;
use crate::data::edit_log::EditLogStore;

/// Handle an incoming interaction
///
/// Only slash commands are handled; components, autocomplete and modals are ignored.
pub async fn handle_interaction_create(
    store: &Arc<dyn EditLogStore>,
    ctx: Context,
    interaction: Interaction,
) {
    if let Interaction::Command(command) = interaction {
        tracing::debug!(
            "Received /{} from {}",
            command.data.name,
            command.user.name
        );

        command::handle_command(store, ctx, &command).await;
    }
}
