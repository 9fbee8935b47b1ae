//! Rawrbot Test Utils
//!
//! Provides shared testing utilities for the rawrbot workspace. This crate offers a builder
//! pattern for creating test contexts with in-memory SQLite databases, factories and fixtures
//! for edit log rows, and factories for Serenity models.
//!
//! # Overview
//!
//! The test utilities consist of these main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Persisted test rows with sensible defaults
//! - **fixture**: In-memory entity models, never inserted
//! - **serenity**: Serenity API objects deserialized from JSON
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_edit_log() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_edit_log_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
pub mod serenity;
