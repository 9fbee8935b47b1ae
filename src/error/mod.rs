//! Error types for the bot.
//!
//! `AppError` is the top-level error returned from startup and from bot plumbing. It wraps
//! the domain-specific errors of each concern: configuration, edit log storage, and slash
//! command input.

pub mod command;
pub mod config;
pub mod store;

use thiserror::Error;

use crate::error::{command::CommandError, config::ConfigError, store::EditStoreError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most variants use
/// `#[from]` for automatic conversion so `?` works across layers.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Edit log store failure, including an unreachable database.
    #[error(transparent)]
    StoreErr(#[from] EditStoreError),

    /// Invalid slash command input.
    #[error(transparent)]
    CommandErr(#[from] CommandError),

    /// Database operation error from SeaORM outside the edit log store (connecting,
    /// running migrations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
