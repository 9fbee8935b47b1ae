//! Edit history factory for creating test `message_edit_history` rows.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test edit histories with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::message_edit_history::MessageEditHistoryFactory;
///
/// let history = MessageEditHistoryFactory::new(&db)
///     .message_id("123456789")
///     .build()
///     .await?;
/// ```
pub struct MessageEditHistoryFactory<'a> {
    db: &'a DatabaseConnection,
    message_id: String,
}

impl<'a> MessageEditHistoryFactory<'a> {
    /// Creates a new factory with default values.
    ///
    /// Defaults:
    /// - message_id: `"{id}"` where id is auto-incremented
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `MessageEditHistoryFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            message_id: next_id().to_string(),
        }
    }

    /// Sets the Discord message ID the history belongs to.
    pub fn message_id(mut self, message_id: impl Into<String>) -> Self {
        self.message_id = message_id.into();
        self
    }

    /// Builds and inserts the history entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::message_edit_history::Model)` - Created history entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::message_edit_history::Model, DbErr> {
        let now = Utc::now();
        entity::message_edit_history::ActiveModel {
            id: ActiveValue::NotSet,
            message_id: ActiveValue::Set(self.message_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an edit history with default values.
///
/// Shorthand for `MessageEditHistoryFactory::new(db).build().await`.
pub async fn create_history(
    db: &DatabaseConnection,
) -> Result<entity::message_edit_history::Model, DbErr> {
    MessageEditHistoryFactory::new(db).build().await
}

/// Creates an edit history for a specific message ID.
///
/// Shorthand for `MessageEditHistoryFactory::new(db).message_id(message_id).build().await`.
pub async fn create_history_for(
    db: &DatabaseConnection,
    message_id: impl Into<String>,
) -> Result<entity::message_edit_history::Model, DbErr> {
    MessageEditHistoryFactory::new(db)
        .message_id(message_id)
        .build()
        .await
}
