use chrono::{DateTime, Duration, TimeZone, Utc};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, context::TestContext, factory};

use crate::{
    data::edit_log::{DatabaseEditLogStore, EditLogStore, InMemoryEditLogStore},
    error::{store::EditStoreError, AppError},
    model::edit::{EditRecord, RetentionPolicy},
};

mod database;
mod get_edits;
mod record_edit;
mod retention;

/// Fixed base timestamp so ordering assertions do not depend on the clock.
fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, 18, 12, 0, 0).unwrap()
}

/// `base_time()` shifted by `seconds`.
fn at(seconds: i64) -> DateTime<Utc> {
    base_time() + Duration::seconds(seconds)
}

/// Builds a database-backed store over a fresh in-memory SQLite schema.
///
/// The returned `TestContext` owns the connection and must outlive the store's use.
async fn database_store(retention: RetentionPolicy) -> (TestContext, DatabaseEditLogStore) {
    let test = TestBuilder::new()
        .with_edit_log_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.clone().unwrap();

    (test, DatabaseEditLogStore::new(db, retention))
}
