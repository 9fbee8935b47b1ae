//! Test factory for creating Serenity Message objects.

use serenity::all::Message;

use crate::serenity::user::user_json;

/// Default author ID for test messages.
pub const DEFAULT_AUTHOR_ID: u64 = 555555555;

/// Default author username for test messages.
pub const DEFAULT_AUTHOR_NAME: &str = "tester";

/// Default creation timestamp for test messages.
pub const DEFAULT_TIMESTAMP: &str = "2025-10-18T12:00:00.000000+00:00";

/// Creates a test Serenity Message authored by a default, non-bot user.
///
/// # Arguments
/// - `message_id` - Discord message ID (snowflake)
/// - `channel_id` - Discord channel ID the message was posted in
/// - `content` - Text content of the message
///
/// # Panics
/// - If the JSON cannot be deserialized into a Message (indicates invalid test data)
pub fn create_test_message(message_id: u64, channel_id: u64, content: &str) -> Message {
    create_test_message_from(
        message_id,
        channel_id,
        content,
        DEFAULT_AUTHOR_ID,
        DEFAULT_AUTHOR_NAME,
        false,
    )
}

/// Creates a test Serenity Message with a custom author.
///
/// # Arguments
/// - `message_id` - Discord message ID (snowflake)
/// - `channel_id` - Discord channel ID the message was posted in
/// - `content` - Text content of the message
/// - `author_id` - Discord user ID of the author
/// - `author_name` - Username of the author
/// - `bot` - Whether the author is a bot account
///
/// # Panics
/// - If the JSON cannot be deserialized into a Message (indicates invalid test data)
pub fn create_test_message_from(
    message_id: u64,
    channel_id: u64,
    content: &str,
    author_id: u64,
    author_name: &str,
    bot: bool,
) -> Message {
    serde_json::from_value(serde_json::json!({
        "id": message_id.to_string(),
        "channel_id": channel_id.to_string(),
        "author": user_json(author_id, author_name, bot),
        "content": content,
        "timestamp": DEFAULT_TIMESTAMP,
        "edited_timestamp": null,
        "tts": false,
        "mention_everyone": false,
        "mentions": [],
        "mention_roles": [],
        "mention_channels": [],
        "attachments": [],
        "embeds": [],
        "reactions": [],
        "pinned": false,
        "type": 0,
        "components": [],
        "sticker_items": [],
    }))
    .expect("Failed to create test message - invalid JSON structure")
}
