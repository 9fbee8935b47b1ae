use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::{
    config::{Config, EditStoreBackend},
    data::edit_log::{DatabaseEditLogStore, EditLogStore, InMemoryEditLogStore},
    error::AppError,
};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the given connection string, then runs all pending
/// SeaORM migrations so the edit log tables exist before the store is used.
///
/// # Arguments
/// - `database_url` - SeaORM connection URL, e.g. `sqlite://edits.db?mode=rwc`
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(database_url: &str) -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new(database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the edit log backend selected by configuration.
///
/// # Returns
/// - `Ok(Arc<dyn EditLogStore>)` - Store shared by all event handlers
/// - `Err(AppError)` - The database backend was selected and could not be reached
pub async fn build_edit_store(config: &Config) -> Result<Arc<dyn EditLogStore>, AppError> {
    let store: Arc<dyn EditLogStore> = match &config.edit_store {
        EditStoreBackend::Memory => {
            tracing::info!("Using in-memory edit log; history is lost on restart");
            Arc::new(InMemoryEditLogStore::with_retention(config.retention))
        }
        EditStoreBackend::Database { url } => {
            let db = connect_to_database(url).await?;
            tracing::info!("Using database edit log");
            Arc::new(DatabaseEditLogStore::new(db, config.retention))
        }
    };

    Ok(store)
}
