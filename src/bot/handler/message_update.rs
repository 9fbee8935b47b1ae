//! Message update handler feeding the edit tracker.
//!
//! Discord's update event only carries the new state of a message. The previous content
//! comes from Serenity's message cache, so edits of messages that were never cached (sent
//! before the bot started, or evicted) cannot be recorded and are skipped.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serenity::all::{Context, Message, MessageUpdateEvent, Timestamp};

use crate::data::edit_log::EditLogStore;
use crate::service::edit_tracker::EditTrackerService;

/// Handle a message edit
///
/// Store failures are logged and the edit is dropped.
pub async fn handle_message_update(
    store: &Arc<dyn EditLogStore>,
    _ctx: Context,
    old_if_available: Option<Message>,
    _new: Option<Message>,
    event: MessageUpdateEvent,
) {
    let message_id = event.id.to_string();
    let old_content = old_if_available.as_ref().map(|m| m.content.as_str());
    let new_content = event.content.as_deref();
    let edited_at = resolve_edited_at(event.edited_timestamp);

    let tracker = EditTrackerService::new(store);

    match tracker
        .record_update(&message_id, old_content, new_content, edited_at)
        .await
    {
        Ok(true) => {
            tracing::debug!(
                "Recorded edit of message {} in channel {}",
                message_id,
                event.channel_id
            );
        }
        Ok(false) => {
            tracing::debug!(
                "Skipped update of message {} (old content cached: {})",
                message_id,
                old_content.is_some()
            );
        }
        Err(e) => {
            tracing::error!("Failed to record edit of message {}: {}", message_id, e);
        }
    }
}

/// Time to record for an edit: Discord's edit timestamp, or now if the event has none.
pub fn resolve_edited_at(edited_timestamp: Option<Timestamp>) -> DateTime<Utc> {
    edited_timestamp
        .map(|timestamp| timestamp.to_utc())
        .unwrap_or_else(Utc::now)
}
