//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON, simulating what
//! Discord's API would return.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::message::create_test_message;
//!
//! let message = create_test_message(111, 222, "Hi, Discraft");
//! assert_eq!(message.content, "Hi, Discraft");
//! ```
//!
//! # Available Factories
//!
//! - `user::create_test_user` - Create Serenity User objects
//! - `message::create_test_message` - Create Serenity Message objects

pub mod message;
pub mod user;

pub use message::{create_test_message, create_test_message_from};
pub use user::create_test_user;
