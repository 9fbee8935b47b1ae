use super::*;

/// Tests that an unknown message has an empty in-memory history.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn memory_returns_empty_for_unknown_message() -> Result<(), EditStoreError> {
    let store = InMemoryEditLogStore::new();

    assert!(store.get_edits("never-seen-id").await?.is_empty());

    Ok(())
}

/// Tests that an unknown message has an empty database history.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn database_returns_empty_for_unknown_message() -> Result<(), EditStoreError> {
    let (_test, store) = database_store(RetentionPolicy::Unbounded).await;

    assert!(store.get_edits("never-seen-id").await?.is_empty());

    Ok(())
}

/// Tests that mutating a returned history does not affect the store.
///
/// Expected: Ok with stored history unchanged
#[tokio::test]
async fn memory_returns_independent_copy() -> Result<(), EditStoreError> {
    let store = InMemoryEditLogStore::new();
    store.record_edit("400", "kept", at(0)).await?;

    let mut copy = store.get_edits("400").await?;
    copy.clear();
    copy.push(EditRecord::new("injected", at(9)));

    assert_eq!(
        store.get_edits("400").await?,
        vec![EditRecord::new("kept", at(0))]
    );

    Ok(())
}

/// Tests reading history rows created directly through factories.
///
/// Verifies the database backend reads rows ordered by insertion, converting them to
/// domain records.
///
/// Expected: Ok with records in factory insertion order
#[tokio::test]
async fn database_reads_existing_rows_in_order() -> Result<(), AppError> {
    let (test, store) = database_store(RetentionPolicy::Unbounded).await;
    let db = test.db.as_ref().unwrap();

    let (_history, rows) =
        factory::helpers::create_history_with_edits(db, "500", &["first", "second", "third"])
            .await?;

    let edits = store.get_edits("500").await?;

    let expected: Vec<EditRecord> = rows.into_iter().map(EditRecord::from_entity).collect();
    assert_eq!(edits, expected);
    assert_eq!(edits[0].content, "first");
    assert_eq!(edits[2].content, "third");

    Ok(())
}

/// Tests that a history row without edit rows reads as empty.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn database_returns_empty_for_history_without_edits() -> Result<(), AppError> {
    let (test, store) = database_store(RetentionPolicy::Unbounded).await;
    let db = test.db.as_ref().unwrap();

    factory::message_edit_history::create_history_for(db, "600").await?;

    assert!(store.get_edits("600").await?.is_empty());

    Ok(())
}
