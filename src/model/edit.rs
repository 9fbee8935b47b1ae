//! Domain models for recorded message edits.

use chrono::{DateTime, Utc};

/// One historical snapshot of a message's content.
///
/// Holds the text of the message immediately before an edit. Records are never mutated
/// after they are appended to a history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditRecord {
    /// Content prior to the edit. May be empty.
    pub content: String,
    /// Timestamp at which the edit was detected.
    pub edited_at: DateTime<Utc>,
}

impl EditRecord {
    /// Creates a new edit record.
    pub fn new(content: impl Into<String>, edited_at: DateTime<Utc>) -> Self {
        Self {
            content: content.into(),
            edited_at,
        }
    }

    /// Converts an entity model to an edit record at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `EditRecord` - The converted domain model
    pub fn from_entity(entity: entity::message_edit::Model) -> Self {
        Self {
            content: entity.content,
            edited_at: entity.edited_at,
        }
    }
}

/// How many records a single message's history may retain.
///
/// Both store backends apply the policy after every append. With `MaxPerMessage(n)` the
/// oldest records are evicted until exactly `n` remain, so the retained records are always
/// the most recent ones, still in chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RetentionPolicy {
    /// Keep every record for the lifetime of the store.
    #[default]
    Unbounded,
    /// Keep at most this many records per message. Always at least 1.
    MaxPerMessage(usize),
}

impl RetentionPolicy {
    /// Number of oldest records to evict from a history currently holding `len` records.
    pub fn excess(&self, len: usize) -> usize {
        match self {
            Self::Unbounded => 0,
            Self::MaxPerMessage(max) => len.saturating_sub(*max),
        }
    }
}
