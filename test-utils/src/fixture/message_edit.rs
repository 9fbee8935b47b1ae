//! Edit fixtures for creating in-memory `message_edit` models.

use chrono::{DateTime, TimeZone, Utc};
use entity::message_edit;

/// Default recorded prior content.
pub const DEFAULT_CONTENT: &str = "Original message content";

/// Default history row ID.
pub const DEFAULT_HISTORY_ID: i32 = 1;

/// Default edit timestamp, fixed so assertions are stable.
pub fn default_edited_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, 18, 12, 0, 0)
        .single()
        .expect("valid fixed timestamp")
}

/// Creates an edit entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - history_id: `1`
/// - content: `"Original message content"`
/// - edited_at: `2025-10-18 12:00:00 UTC`
pub fn entity() -> message_edit::Model {
    entity_builder().build()
}

/// Creates a builder for an edit entity model with customizable fields.
pub fn entity_builder() -> MessageEditEntityBuilder {
    MessageEditEntityBuilder {
        id: 1,
        history_id: DEFAULT_HISTORY_ID,
        content: DEFAULT_CONTENT.to_string(),
        edited_at: default_edited_at(),
    }
}

/// Builder for in-memory `message_edit::Model` values.
pub struct MessageEditEntityBuilder {
    id: i32,
    history_id: i32,
    content: String,
    edited_at: DateTime<Utc>,
}

impl MessageEditEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn history_id(mut self, history_id: i32) -> Self {
        self.history_id = history_id;
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn edited_at(mut self, edited_at: DateTime<Utc>) -> Self {
        self.edited_at = edited_at;
        self
    }

    pub fn build(self) -> message_edit::Model {
        message_edit::Model {
            id: self.id,
            history_id: self.history_id,
            content: self.content,
            edited_at: self.edited_at,
        }
    }
}
