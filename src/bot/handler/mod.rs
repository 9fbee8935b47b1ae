use std::sync::Arc;

use serenity::all::{
    Context, EventHandler, GuildId, Interaction, Message, MessageUpdateEvent, Ready,
};
use serenity::async_trait;

use crate::data::edit_log::EditLogStore;

pub mod interaction;
pub mod message;
pub mod message_update;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub edit_store: Arc<dyn EditLogStore>,
    /// Guild that additionally receives guild-scoped commands, which update instantly.
    pub dev_guild_id: Option<GuildId>,
}

impl Handler {
    pub fn new(edit_store: Arc<dyn EditLogStore>, dev_guild_id: Option<GuildId>) -> Self {
        Self {
            edit_store,
            dev_guild_id,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready, self.dev_guild_id).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(ctx, message).await;
    }

    /// Called when a message is edited, with the cached pre-edit message if available
    async fn message_update(
        &self,
        ctx: Context,
        old_if_available: Option<Message>,
        new: Option<Message>,
        event: MessageUpdateEvent,
    ) {
        message_update::handle_message_update(&self.edit_store, ctx, old_if_available, new, event)
            .await;
    }

    /// Called when a slash command or other interaction is received
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(&self.edit_store, ctx, interaction).await;
    }
}
