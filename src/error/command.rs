use thiserror::Error;

/// Invalid input to a slash command.
///
/// Each variant maps to a user-facing reply in the command handler; none of them are
/// logged above `debug`.
#[derive(Error, Debug, PartialEq)]
pub enum CommandError {
    /// A required option was not present in the interaction payload.
    #[error("Missing required option: {0}")]
    MissingOption(String),

    /// The supplied message ID is not a Discord snowflake.
    #[error("Invalid message ID '{0}'")]
    InvalidMessageId(String),

    /// The selected channel cannot contain messages (category, forum, directory...).
    #[error("Channel cannot contain messages")]
    UnsupportedChannel,

    /// The activity type option did not match any known activity.
    #[error("Unknown activity type '{0}'")]
    UnknownActivityType(String),
}
