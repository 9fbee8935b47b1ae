use thiserror::Error;

/// Failures of an edit log store.
///
/// A message with no recorded history is not an error; `get_edits` returns an empty
/// sequence for it.
#[derive(Error, Debug)]
pub enum EditStoreError {
    /// The backing store could not be reached or rejected the operation.
    ///
    /// Only produced by the database backend. Existing history is left untouched, the
    /// failed append is rolled back and not retried.
    #[error("Edit log storage unavailable: {0}")]
    StorageUnavailable(#[from] sea_orm::DbErr),

    /// An empty message ID was passed to `record_edit`.
    #[error("Message ID must not be empty")]
    InvalidMessageId,
}
