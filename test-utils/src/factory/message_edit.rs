//! Edit factory for creating test `message_edit` rows.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::fixture::message_edit::DEFAULT_CONTENT;

/// Factory for creating test edit rows with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::message_edit::MessageEditFactory;
///
/// let edit = MessageEditFactory::new(&db, history.id)
///     .content("original text")
///     .build()
///     .await?;
/// ```
pub struct MessageEditFactory<'a> {
    db: &'a DatabaseConnection,
    history_id: i32,
    content: String,
    edited_at: DateTime<Utc>,
}

impl<'a> MessageEditFactory<'a> {
    /// Creates a new factory with default values.
    ///
    /// Defaults:
    /// - content: `"Original message content"`
    /// - edited_at: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `history_id` - ID of the `message_edit_history` row this edit belongs to
    ///
    /// # Returns
    /// - `MessageEditFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, history_id: i32) -> Self {
        Self {
            db,
            history_id,
            content: DEFAULT_CONTENT.to_string(),
            edited_at: Utc::now(),
        }
    }

    /// Sets the recorded prior content.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets the time the edit was recorded.
    pub fn edited_at(mut self, edited_at: DateTime<Utc>) -> Self {
        self.edited_at = edited_at;
        self
    }

    /// Builds and inserts the edit entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::message_edit::Model)` - Created edit entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::message_edit::Model, DbErr> {
        entity::message_edit::ActiveModel {
            id: ActiveValue::NotSet,
            history_id: ActiveValue::Set(self.history_id),
            content: ActiveValue::Set(self.content),
            edited_at: ActiveValue::Set(self.edited_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an edit row with default values under the given history.
///
/// Shorthand for `MessageEditFactory::new(db, history_id).build().await`.
pub async fn create_edit(
    db: &DatabaseConnection,
    history_id: i32,
) -> Result<entity::message_edit::Model, DbErr> {
    MessageEditFactory::new(db, history_id).build().await
}
