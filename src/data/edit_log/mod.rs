//! Edit log store: the authoritative record of prior message contents.
//!
//! The store maps a Discord message ID to the ordered list of contents that message had
//! before each of its edits. It is append-only: there is no update or delete operation,
//! only the eviction performed by the configured [`RetentionPolicy`].
//!
//! Two interchangeable backends implement [`EditLogStore`]:
//! - [`InMemoryEditLogStore`] - process-local table, lost on restart, never fails
//! - [`DatabaseEditLogStore`] - SeaORM-backed table, durable, may report
//!   `StorageUnavailable`
//!
//! The backend is chosen once at startup (see `startup::build_edit_store`) and shared as
//! `Arc<dyn EditLogStore>`.
//!
//! [`RetentionPolicy`]: crate::model::edit::RetentionPolicy

pub mod database;
pub mod memory;

use chrono::{DateTime, Utc};
use serenity::async_trait;

use crate::{error::store::EditStoreError, model::edit::EditRecord};

pub use database::DatabaseEditLogStore;
pub use memory::InMemoryEditLogStore;

/// Append-only store of message edit histories.
#[async_trait]
pub trait EditLogStore: Send + Sync {
    /// Appends the content a message had before an edit.
    ///
    /// Creates the history for `message_id` if none exists. Repeated or rapid calls for the
    /// same message simply grow its history in call order.
    ///
    /// # Arguments
    /// - `message_id` - Discord message ID; must not be empty
    /// - `prior_content` - Content immediately before the edit; may be empty
    /// - `edited_at` - When the edit was detected
    ///
    /// # Returns
    /// - `Ok(())` - Record appended
    /// - `Err(EditStoreError::InvalidMessageId)` - `message_id` was empty; nothing stored
    /// - `Err(EditStoreError::StorageUnavailable)` - Backing store unreachable; existing
    ///   history unchanged
    async fn record_edit(
        &self,
        message_id: &str,
        prior_content: &str,
        edited_at: DateTime<Utc>,
    ) -> Result<(), EditStoreError>;

    /// Returns the edit history of a message, oldest edit first.
    ///
    /// The returned vector is an owned copy; modifying it does not affect the store.
    ///
    /// # Returns
    /// - `Ok(Vec<EditRecord>)` - Recorded history, empty if the message has none
    /// - `Err(EditStoreError::StorageUnavailable)` - Backing store unreachable
    async fn get_edits(&self, message_id: &str) -> Result<Vec<EditRecord>, EditStoreError>;
}

/// Rejects empty message IDs before any backend work happens.
fn ensure_message_id(message_id: &str) -> Result<(), EditStoreError> {
    if message_id.is_empty() {
        return Err(EditStoreError::InvalidMessageId);
    }
    Ok(())
}
