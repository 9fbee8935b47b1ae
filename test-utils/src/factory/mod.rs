//! Factory methods for creating persisted test data.
//!
//! Factories insert rows with sensible defaults, reducing boilerplate in tests. Each entity
//! has a `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let history = factory::create_history(&db).await?;
//! let edit = factory::message_edit::MessageEditFactory::new(&db, history.id)
//!     .content("before the edit")
//!     .build()
//!     .await?;
//!
//! // Or a whole history in one call
//! let (history, edits) =
//!     factory::helpers::create_history_with_edits(&db, "1234", &["v1", "v2"]).await?;
//! ```
//!
//! # Available Factories
//!
//! - `message_edit_history` - Create edit history rows (one per message)
//! - `message_edit` - Create individual edit rows
//! - `helpers` - ID generation and multi-row helpers

pub mod helpers;
pub mod message_edit;
pub mod message_edit_history;

pub use message_edit::create_edit;
pub use message_edit_history::create_history;
