//! SeaORM-backed edit log backend.
//!
//! Each tracked message owns one `message_edit_history` row, upserted on every append,
//! and one `message_edit` row per recorded edit. `message_edit.id` is auto-incrementing
//! and defines chronological order within a history.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, DatabaseConnection, DatabaseTransaction,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};
use serenity::async_trait;

use crate::{
    data::edit_log::{ensure_message_id, EditLogStore},
    error::store::EditStoreError,
    model::edit::{EditRecord, RetentionPolicy},
};

/// Edit log persisted in a SeaORM database.
///
/// Holds its own connection pool handle so it can be shared as `Arc<dyn EditLogStore>`
/// for the lifetime of the bot. Every append runs in a single transaction; a failure at any
/// step rolls the whole append back and surfaces as `StorageUnavailable`.
#[derive(Clone)]
pub struct DatabaseEditLogStore {
    db: DatabaseConnection,
    retention: RetentionPolicy,
}

impl DatabaseEditLogStore {
    /// Creates a new DatabaseEditLogStore instance.
    ///
    /// The schema must already exist (see `startup::connect_to_database`, which runs the
    /// migrations).
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `retention` - Per-message retention policy applied after each append
    ///
    /// # Returns
    /// - `DatabaseEditLogStore` - New store instance
    pub fn new(db: DatabaseConnection, retention: RetentionPolicy) -> Self {
        Self { db, retention }
    }

    /// Creates the history row for a message or touches its `updated_at`.
    ///
    /// Uses a single `INSERT ... ON CONFLICT (message_id) DO UPDATE` so concurrent first
    /// edits of one message cannot race into a unique violation, then reads the row back.
    ///
    /// # Returns
    /// - `Ok(i32)` - ID of the history row for `message_id`
    /// - `Err(DbErr)` - Database error during upsert or read-back
    async fn upsert_history(
        &self,
        txn: &DatabaseTransaction,
        message_id: &str,
        now: DateTime<Utc>,
    ) -> Result<i32, DbErr> {
        let history = entity::message_edit_history::ActiveModel {
            id: ActiveValue::NotSet,
            message_id: ActiveValue::Set(message_id.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        entity::prelude::MessageEditHistory::insert(history)
            .on_conflict(
                OnConflict::column(entity::message_edit_history::Column::MessageId)
                    .update_column(entity::message_edit_history::Column::UpdatedAt)
                    .to_owned(),
            )
            .exec(txn)
            .await?;

        let history = entity::prelude::MessageEditHistory::find()
            .filter(entity::message_edit_history::Column::MessageId.eq(message_id))
            .one(txn)
            .await?
            .ok_or_else(|| {
                DbErr::RecordNotFound(format!("edit history for message {}", message_id))
            })?;

        Ok(history.id)
    }

    /// Evicts the oldest edits of a history beyond the retention bound.
    async fn apply_retention(
        &self,
        txn: &DatabaseTransaction,
        history_id: i32,
    ) -> Result<(), DbErr> {
        if self.retention == RetentionPolicy::Unbounded {
            return Ok(());
        }

        let count = entity::prelude::MessageEdit::find()
            .filter(entity::message_edit::Column::HistoryId.eq(history_id))
            .count(txn)
            .await?;

        let excess = self.retention.excess(count as usize);
        if excess == 0 {
            return Ok(());
        }

        let stale_ids: Vec<i32> = entity::prelude::MessageEdit::find()
            .filter(entity::message_edit::Column::HistoryId.eq(history_id))
            .order_by_asc(entity::message_edit::Column::Id)
            .limit(excess as u64)
            .all(txn)
            .await?
            .into_iter()
            .map(|edit| edit.id)
            .collect();

        entity::prelude::MessageEdit::delete_many()
            .filter(entity::message_edit::Column::Id.is_in(stale_ids))
            .exec(txn)
            .await?;

        Ok(())
    }
}

#[async_trait]
impl EditLogStore for DatabaseEditLogStore {
    async fn record_edit(
        &self,
        message_id: &str,
        prior_content: &str,
        edited_at: DateTime<Utc>,
    ) -> Result<(), EditStoreError> {
        ensure_message_id(message_id)?;

        // Dropping the transaction without commit rolls back every step below
        let txn = self.db.begin().await?;

        let history_id = self.upsert_history(&txn, message_id, Utc::now()).await?;

        let edit = entity::message_edit::ActiveModel {
            id: ActiveValue::NotSet,
            history_id: ActiveValue::Set(history_id),
            content: ActiveValue::Set(prior_content.to_string()),
            edited_at: ActiveValue::Set(edited_at),
        };
        entity::prelude::MessageEdit::insert(edit).exec(&txn).await?;

        self.apply_retention(&txn, history_id).await?;

        txn.commit().await?;

        Ok(())
    }

    async fn get_edits(&self, message_id: &str) -> Result<Vec<EditRecord>, EditStoreError> {
        let Some(history) = entity::prelude::MessageEditHistory::find()
            .filter(entity::message_edit_history::Column::MessageId.eq(message_id))
            .one(&self.db)
            .await?
        else {
            return Ok(Vec::new());
        };

        let edits = entity::prelude::MessageEdit::find()
            .filter(entity::message_edit::Column::HistoryId.eq(history.id))
            .order_by_asc(entity::message_edit::Column::Id)
            .all(&self.db)
            .await?;

        Ok(edits.into_iter().map(EditRecord::from_entity).collect())
    }
}
