use serenity::all::{Context, Message};

/// Exact message content the bot answers with a greeting.
pub const GREETING_TRIGGER: &str = "Hi, Discraft";

/// Handle message creation in a channel
pub async fn handle_message(ctx: Context, message: Message) {
    let Some(reply) = greeting_reply(&message) else {
        return;
    };

    if let Err(e) = message.reply(&ctx, reply).await {
        tracing::error!(
            "Failed to greet {} in channel {}: {}",
            message.author.name,
            message.channel_id,
            e
        );
    }
}

/// Greeting to send in response to `message`, if any.
///
/// Only the exact trigger text from a non-bot author gets a reply.
pub fn greeting_reply(message: &Message) -> Option<String> {
    if message.author.bot || message.content != GREETING_TRIGGER {
        return None;
    }

    Some(format!("Hello, {}!", message.author.name))
}
