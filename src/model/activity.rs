//! Presence activity selectable through the `/activity` command.

use std::str::FromStr;

use serenity::all::ActivityData;

use crate::error::command::CommandError;

/// Stream URL used for the streaming activity, which Discord requires to carry one.
pub const DEFAULT_STREAM_URL: &str = "https://twitch.tv/discord";

/// Activity type the bot owner can choose from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Playing,
    Streaming,
    Listening,
    Watching,
    Competing,
}

impl ActivityKind {
    /// All kinds in the order they are offered as command choices.
    pub const ALL: [ActivityKind; 5] = [
        Self::Playing,
        Self::Streaming,
        Self::Listening,
        Self::Watching,
        Self::Competing,
    ];

    /// Choice value sent by Discord, e.g. `PLAYING`.
    pub fn as_value(&self) -> &'static str {
        match self {
            Self::Playing => "PLAYING",
            Self::Streaming => "STREAMING",
            Self::Listening => "LISTENING",
            Self::Watching => "WATCHING",
            Self::Competing => "COMPETING",
        }
    }

    /// Human-readable choice label, e.g. `Playing`.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Playing => "Playing",
            Self::Streaming => "Streaming",
            Self::Listening => "Listening",
            Self::Watching => "Watching",
            Self::Competing => "Competing",
        }
    }

    /// Builds the Serenity activity carrying `text` as its name.
    pub fn to_activity(&self, text: &str) -> ActivityData {
        match self {
            Self::Playing => ActivityData::playing(text),
            Self::Streaming => ActivityData::streaming(text, DEFAULT_STREAM_URL)
                .unwrap_or_else(|_| ActivityData::playing(text)),
            Self::Listening => ActivityData::listening(text),
            Self::Watching => ActivityData::watching(text),
            Self::Competing => ActivityData::competing(text),
        }
    }
}

impl FromStr for ActivityKind {
    type Err = CommandError;

    /// Parses a choice value case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_value().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CommandError::UnknownActivityType(s.to_string()))
    }
}
