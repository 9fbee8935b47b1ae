//! Process-local edit log backend.

use std::{collections::HashMap, sync::Arc};

use chrono::{DateTime, Utc};
use serenity::async_trait;
use tokio::sync::RwLock;

use crate::{
    data::edit_log::{ensure_message_id, EditLogStore},
    error::store::EditStoreError,
    model::edit::{EditRecord, RetentionPolicy},
};

/// Edit log held entirely in memory.
///
/// Cloning yields another handle to the same table. History lives as long as the last
/// handle and is lost on restart. Appends for one message are serialized by the write lock,
/// so a message's history order matches the order in which `record_edit` calls complete.
#[derive(Clone, Default)]
pub struct InMemoryEditLogStore {
    /// Message ID to its edits, oldest first.
    edits: Arc<RwLock<HashMap<String, Vec<EditRecord>>>>,
    retention: RetentionPolicy,
}

impl InMemoryEditLogStore {
    /// Creates an empty store that keeps every record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store applying the given retention policy.
    pub fn with_retention(retention: RetentionPolicy) -> Self {
        Self {
            edits: Arc::default(),
            retention,
        }
    }
}

#[async_trait]
impl EditLogStore for InMemoryEditLogStore {
    async fn record_edit(
        &self,
        message_id: &str,
        prior_content: &str,
        edited_at: DateTime<Utc>,
    ) -> Result<(), EditStoreError> {
        ensure_message_id(message_id)?;

        let mut edits = self.edits.write().await;
        let history = edits.entry(message_id.to_string()).or_default();
        history.push(EditRecord::new(prior_content, edited_at));

        let excess = self.retention.excess(history.len());
        if excess > 0 {
            history.drain(..excess);
        }

        Ok(())
    }

    async fn get_edits(&self, message_id: &str) -> Result<Vec<EditRecord>, EditStoreError> {
        let edits = self.edits.read().await;

        Ok(edits.get(message_id).cloned().unwrap_or_default())
    }
}
