use super::*;

/// Appends seven edits under a bound of three and checks the newest three remain in order.
async fn keeps_newest_records(store: &dyn EditLogStore) -> Result<(), EditStoreError> {
    for i in 0..7 {
        store.record_edit("1100", &format!("v{}", i), at(i)).await?;
    }

    let edits = store.get_edits("1100").await?;

    assert_eq!(
        edits,
        vec![
            EditRecord::new("v4", at(4)),
            EditRecord::new("v5", at(5)),
            EditRecord::new("v6", at(6)),
        ]
    );

    Ok(())
}

/// Tests bounded retention for the in-memory backend.
///
/// Expected: Ok with only the three most recent records
#[tokio::test]
async fn memory_keeps_newest_records() -> Result<(), EditStoreError> {
    let store = InMemoryEditLogStore::with_retention(RetentionPolicy::MaxPerMessage(3));
    keeps_newest_records(&store).await
}

/// Tests bounded retention for the database backend.
///
/// Expected: Ok with only the three most recent records
#[tokio::test]
async fn database_keeps_newest_records() -> Result<(), EditStoreError> {
    let (_test, store) = database_store(RetentionPolicy::MaxPerMessage(3)).await;
    keeps_newest_records(&store).await
}

/// Tests that eviction in one message leaves other messages alone.
///
/// Expected: Ok with message 1201 untouched by eviction in 1200
#[tokio::test]
async fn database_evicts_per_message() -> Result<(), AppError> {
    let (test, store) = database_store(RetentionPolicy::MaxPerMessage(1)).await;
    let db = test.db.as_ref().unwrap();

    store.record_edit("1201", "other", at(0)).await?;
    store.record_edit("1200", "old", at(1)).await?;
    store.record_edit("1200", "new", at(2)).await?;

    assert_eq!(
        store.get_edits("1200").await?,
        vec![EditRecord::new("new", at(2))]
    );
    assert_eq!(
        store.get_edits("1201").await?,
        vec![EditRecord::new("other", at(0))]
    );

    let rows = entity::prelude::MessageEdit::find().count(db).await?;
    assert_eq!(rows, 2);

    Ok(())
}
