//! Edit tracker service.
//!
//! Sits between the gateway's message-update events and the edit log store. It owns the
//! rule for which updates count as edits worth recording; the store itself records
//! whatever it is given.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::{data::edit_log::EditLogStore, error::store::EditStoreError};

/// Service deciding whether a message update is recorded as an edit.
pub struct EditTrackerService<'a> {
    store: &'a Arc<dyn EditLogStore>,
}

impl<'a> EditTrackerService<'a> {
    /// Creates a new EditTrackerService instance.
    ///
    /// # Arguments
    /// - `store` - Edit log store receiving recorded edits
    ///
    /// # Returns
    /// - `EditTrackerService` - New service instance
    pub fn new(store: &'a Arc<dyn EditLogStore>) -> Self {
        Self { store }
    }

    /// Records the prior content of an updated message if its text actually changed.
    ///
    /// Nothing is recorded when the prior content is unknown (the message was not cached)
    /// or empty, when the update carries no new content (embed or attachment-only
    /// updates), or when the content is unchanged.
    ///
    /// # Arguments
    /// - `message_id` - Discord message ID
    /// - `old_content` - Content before the update, if known
    /// - `new_content` - Content after the update, if the update changed it
    /// - `edited_at` - When the edit happened
    ///
    /// # Returns
    /// - `Ok(true)` - Prior content appended to the message's history
    /// - `Ok(false)` - Update ignored
    /// - `Err(EditStoreError)` - Store failure, propagated unchanged
    pub async fn record_update(
        &self,
        message_id: &str,
        old_content: Option<&str>,
        new_content: Option<&str>,
        edited_at: DateTime<Utc>,
    ) -> Result<bool, EditStoreError> {
        let (Some(old), Some(new)) = (old_content, new_content) else {
            return Ok(false);
        };

        if old.is_empty() || old == new {
            return Ok(false);
        }

        self.store.record_edit(message_id, old, edited_at).await?;

        Ok(true)
    }
}
