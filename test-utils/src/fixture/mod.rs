//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them for unit tests
//! of entity-to-domain conversion and as default values for factories.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let edit = fixture::message_edit::entity();
//!
//! let custom = fixture::message_edit::entity_builder()
//!     .content("before")
//!     .build();
//! ```

pub mod message_edit;

pub use message_edit::{entity as message_edit_entity, entity_builder as message_edit_entity_builder};
