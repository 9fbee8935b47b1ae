use super::*;

/// Tests that the first append creates exactly one history row and later appends reuse it.
///
/// Expected: Ok with one history row and three edit rows
#[tokio::test]
async fn upserts_single_history_row_per_message() -> Result<(), AppError> {
    let (test, store) = database_store(RetentionPolicy::Unbounded).await;
    let db = test.db.as_ref().unwrap();

    store.record_edit("700", "v1", at(0)).await?;
    store.record_edit("700", "v2", at(1)).await?;
    store.record_edit("700", "v3", at(2)).await?;

    let histories = entity::prelude::MessageEditHistory::find()
        .filter(entity::message_edit_history::Column::MessageId.eq("700"))
        .count(db)
        .await?;
    assert_eq!(histories, 1);

    let edits = entity::prelude::MessageEdit::find().count(db).await?;
    assert_eq!(edits, 3);

    Ok(())
}

/// Tests that appending touches `updated_at` but preserves `created_at`.
///
/// Expected: Ok with created_at unchanged and updated_at advanced
#[tokio::test]
async fn touches_updated_at_on_append() -> Result<(), AppError> {
    let (test, store) = database_store(RetentionPolicy::Unbounded).await;
    let db = test.db.as_ref().unwrap();

    store.record_edit("800", "v1", at(0)).await?;
    let first = entity::prelude::MessageEditHistory::find()
        .filter(entity::message_edit_history::Column::MessageId.eq("800"))
        .one(db)
        .await?
        .unwrap();

    tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

    store.record_edit("800", "v2", at(1)).await?;
    let second = entity::prelude::MessageEditHistory::find()
        .filter(entity::message_edit_history::Column::MessageId.eq("800"))
        .one(db)
        .await?
        .unwrap();

    assert_eq!(second.id, first.id);
    assert_eq!(second.created_at, first.created_at);
    assert!(second.updated_at > first.updated_at);

    Ok(())
}

/// Tests that history survives a new store over the same connection.
///
/// Simulates a restart by discarding the store and reading through a fresh one.
///
/// Expected: Ok with history intact
#[tokio::test]
async fn history_outlives_store_instance() -> Result<(), AppError> {
    let (test, store) = database_store(RetentionPolicy::Unbounded).await;

    store.record_edit("900", "before restart", at(0)).await?;
    drop(store);

    let reopened = DatabaseEditLogStore::new(test.db.clone().unwrap(), RetentionPolicy::Unbounded);

    assert_eq!(
        reopened.get_edits("900").await?,
        vec![EditRecord::new("before restart", at(0))]
    );

    Ok(())
}

/// Tests that a missing schema surfaces as StorageUnavailable.
///
/// Builds a store over a database without the edit log tables.
///
/// Expected: Err(StorageUnavailable) for both operations
#[tokio::test]
async fn reports_storage_unavailable_without_schema() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let store = DatabaseEditLogStore::new(test.db.clone().unwrap(), RetentionPolicy::Unbounded);

    let recorded = store.record_edit("1000", "content", at(0)).await;
    assert!(matches!(recorded, Err(EditStoreError::StorageUnavailable(_))));

    let read = store.get_edits("1000").await;
    assert!(matches!(read, Err(EditStoreError::StorageUnavailable(_))));

    Ok(())
}
