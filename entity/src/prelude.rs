pub use super::message_edit::Entity as MessageEdit;
pub use super::message_edit_history::Entity as MessageEditHistory;
