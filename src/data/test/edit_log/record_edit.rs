use super::*;

/// Appends `count` sequential edits to one message and checks they come back in order.
async fn preserves_append_order(store: &dyn EditLogStore) -> Result<(), EditStoreError> {
    for i in 0..5 {
        store.record_edit("100", &format!("v{}", i), at(i)).await?;
    }

    let edits = store.get_edits("100").await?;

    let expected: Vec<EditRecord> = (0..5)
        .map(|i| EditRecord::new(format!("v{}", i), at(i)))
        .collect();
    assert_eq!(edits, expected);

    Ok(())
}

/// Records identical and empty contents; neither is deduplicated nor rejected.
async fn keeps_duplicates_and_empty_content(
    store: &dyn EditLogStore,
) -> Result<(), EditStoreError> {
    store.record_edit("200", "same", at(0)).await?;
    store.record_edit("200", "same", at(0)).await?;
    store.record_edit("200", "", at(1)).await?;

    let edits = store.get_edits("200").await?;

    assert_eq!(edits.len(), 3);
    assert_eq!(edits[0], edits[1]);
    assert_eq!(edits[2].content, "");

    Ok(())
}

/// Edits to one message never show up in another's history.
async fn isolates_messages(store: &dyn EditLogStore) -> Result<(), EditStoreError> {
    store.record_edit("B", "b-original", at(0)).await?;
    let before = store.get_edits("B").await?;

    store.record_edit("A", "a-1", at(1)).await?;
    store.record_edit("A", "a-2", at(2)).await?;

    assert_eq!(store.get_edits("B").await?, before);
    assert_eq!(store.get_edits("A").await?.len(), 2);

    Ok(())
}

/// Rejects an empty message ID without storing anything.
async fn rejects_empty_message_id(store: &dyn EditLogStore) -> Result<(), EditStoreError> {
    let result = store.record_edit("", "content", at(0)).await;

    assert!(matches!(result, Err(EditStoreError::InvalidMessageId)));
    assert!(store.get_edits("").await?.is_empty());

    Ok(())
}

/// Tests append ordering for the in-memory backend.
///
/// Expected: Ok with records returned exactly as appended
#[tokio::test]
async fn memory_preserves_append_order() -> Result<(), EditStoreError> {
    preserves_append_order(&InMemoryEditLogStore::new()).await
}

/// Tests append ordering for the database backend.
///
/// Expected: Ok with records returned exactly as appended
#[tokio::test]
async fn database_preserves_append_order() -> Result<(), EditStoreError> {
    let (_test, store) = database_store(RetentionPolicy::Unbounded).await;
    preserves_append_order(&store).await
}

/// Tests that duplicate and empty prior contents are kept.
///
/// Expected: Ok with all three records stored
#[tokio::test]
async fn memory_keeps_duplicates_and_empty_content() -> Result<(), EditStoreError> {
    keeps_duplicates_and_empty_content(&InMemoryEditLogStore::new()).await
}

/// Tests that duplicate and empty prior contents are kept.
///
/// Expected: Ok with all three records stored
#[tokio::test]
async fn database_keeps_duplicates_and_empty_content() -> Result<(), EditStoreError> {
    let (_test, store) = database_store(RetentionPolicy::Unbounded).await;
    keeps_duplicates_and_empty_content(&store).await
}

/// Tests cross-message isolation for the in-memory backend.
///
/// Expected: Ok with message B's history unaffected by appends to A
#[tokio::test]
async fn memory_isolates_messages() -> Result<(), EditStoreError> {
    isolates_messages(&InMemoryEditLogStore::new()).await
}

/// Tests cross-message isolation for the database backend.
///
/// Expected: Ok with message B's history unaffected by appends to A
#[tokio::test]
async fn database_isolates_messages() -> Result<(), EditStoreError> {
    let (_test, store) = database_store(RetentionPolicy::Unbounded).await;
    isolates_messages(&store).await
}

/// Tests empty message ID rejection for the in-memory backend.
///
/// Expected: Err(InvalidMessageId) and nothing stored
#[tokio::test]
async fn memory_rejects_empty_message_id() -> Result<(), EditStoreError> {
    rejects_empty_message_id(&InMemoryEditLogStore::new()).await
}

/// Tests empty message ID rejection for the database backend.
///
/// Expected: Err(InvalidMessageId) and nothing stored
#[tokio::test]
async fn database_rejects_empty_message_id() -> Result<(), EditStoreError> {
    let (_test, store) = database_store(RetentionPolicy::Unbounded).await;
    rejects_empty_message_id(&store).await
}

/// Tests concurrent appends to one in-memory message.
///
/// Spawns many appends at once through cloned handles; every append must land exactly once.
///
/// Expected: Ok with all records present
#[tokio::test]
async fn memory_concurrent_appends_all_land() -> Result<(), EditStoreError> {
    let store = InMemoryEditLogStore::new();

    let handles: Vec<_> = (0..32)
        .map(|i| {
            let store = store.clone();
            tokio::spawn(async move { store.record_edit("300", &i.to_string(), at(i)).await })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap()?;
    }

    let mut contents: Vec<i64> = store
        .get_edits("300")
        .await?
        .into_iter()
        .map(|edit| edit.content.parse().unwrap())
        .collect();
    contents.sort_unstable();

    assert_eq!(contents, (0..32).collect::<Vec<i64>>());

    Ok(())
}
