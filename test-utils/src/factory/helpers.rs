//! Shared helper utilities for factory methods.
//!
//! Provides ID generation and convenience methods for creating an edit history together
//! with its edit rows.

use chrono::{Duration, Utc};
use sea_orm::{DatabaseConnection, DbErr};

use crate::factory::{message_edit::MessageEditFactory, message_edit_history::create_history_for};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an edit history for `message_id` holding one edit row per entry of `contents`.
///
/// Edit rows are inserted in slice order, one second apart starting one hour ago, so both
/// row ids and `edited_at` values ascend.
///
/// # Arguments
/// - `db` - Database connection
/// - `message_id` - Discord message ID the history belongs to
/// - `contents` - Prior contents, oldest first
///
/// # Returns
/// - `Ok((history, edits))` - Created history row and its edit rows in insertion order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_history_with_edits(
    db: &DatabaseConnection,
    message_id: &str,
    contents: &[&str],
) -> Result<
    (
        entity::message_edit_history::Model,
        Vec<entity::message_edit::Model>,
    ),
    DbErr,
> {
    let history = create_history_for(db, message_id).await?;
    let start = Utc::now() - Duration::hours(1);

    let mut edits = Vec::with_capacity(contents.len());
    for (offset, content) in contents.iter().enumerate() {
        let edit = MessageEditFactory::new(db, history.id)
            .content(*content)
            .edited_at(start + Duration::seconds(offset as i64))
            .build()
            .await?;
        edits.push(edit);
    }

    Ok((history, edits))
}
