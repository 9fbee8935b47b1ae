use std::collections::HashMap;

use crate::{
    error::{config::ConfigError, AppError},
    model::edit::RetentionPolicy,
};

/// Number of messages Serenity keeps per channel so old content is available on edits.
const DEFAULT_MESSAGE_CACHE_SIZE: usize = 500;

/// Which edit log backend to run with. Chosen once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditStoreBackend {
    /// Process-local table; history is lost on restart.
    Memory,
    /// SeaORM database at the given connection URL; history survives restarts.
    Database { url: String },
}

pub struct Config {
    pub discord_token: String,

    pub edit_store: EditStoreBackend,
    pub retention: RetentionPolicy,

    pub message_cache_size: usize,
    pub dev_guild_id: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_lookup(|name| std::env::var(name).ok())?)
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// `from_env` delegates here with the process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let discord_token = lookup("DISCORD_TOKEN")
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DISCORD_TOKEN".to_string()))?;

        let edit_store = match lookup("EDIT_STORE").as_deref().map(str::trim) {
            None | Some("") | Some("memory") => EditStoreBackend::Memory,
            Some("database") => EditStoreBackend::Database {
                url: lookup("DATABASE_URL")
                    .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            },
            Some(other) => {
                return Err(ConfigError::InvalidEnvVar {
                    name: "EDIT_STORE".to_string(),
                    value: other.to_string(),
                    reason: "expected 'memory' or 'database'".to_string(),
                })
            }
        };

        let retention = match lookup("EDIT_HISTORY_MAX_PER_MESSAGE") {
            None => RetentionPolicy::Unbounded,
            Some(raw) => match parse_var::<usize>("EDIT_HISTORY_MAX_PER_MESSAGE", &raw)? {
                0 => {
                    return Err(ConfigError::InvalidEnvVar {
                        name: "EDIT_HISTORY_MAX_PER_MESSAGE".to_string(),
                        value: raw,
                        reason: "must be at least 1".to_string(),
                    })
                }
                max => RetentionPolicy::MaxPerMessage(max),
            },
        };

        let message_cache_size = match lookup("MESSAGE_CACHE_SIZE") {
            Some(raw) => parse_var("MESSAGE_CACHE_SIZE", &raw)?,
            None => DEFAULT_MESSAGE_CACHE_SIZE,
        };

        let dev_guild_id = match lookup("DEV_GUILD_ID") {
            None => None,
            Some(raw) => match parse_var::<u64>("DEV_GUILD_ID", &raw)? {
                0 => {
                    return Err(ConfigError::InvalidEnvVar {
                        name: "DEV_GUILD_ID".to_string(),
                        value: raw,
                        reason: "guild IDs are non-zero".to_string(),
                    })
                }
                id => Some(id),
            },
        };

        Ok(Self {
            discord_token,
            edit_store,
            retention,
            message_cache_size,
            dev_guild_id,
        })
    }

    /// Convenience for tests and tooling: configuration from a fixed set of variables.
    pub fn from_map(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        Self::from_lookup(|name| vars.get(name).cloned())
    }
}

fn parse_var<T>(name: &str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e: T::Err| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: raw.to_string(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_to_memory_store_and_unbounded_retention() {
        let config = Config::from_map(&vars(&[("DISCORD_TOKEN", "token")])).unwrap();

        assert_eq!(config.discord_token, "token");
        assert_eq!(config.edit_store, EditStoreBackend::Memory);
        assert_eq!(config.retention, RetentionPolicy::Unbounded);
        assert_eq!(config.message_cache_size, DEFAULT_MESSAGE_CACHE_SIZE);
        assert_eq!(config.dev_guild_id, None);
    }

    #[test]
    fn requires_token() {
        let result = Config::from_map(&vars(&[]));

        assert_eq!(
            result.err(),
            Some(ConfigError::MissingEnvVar("DISCORD_TOKEN".to_string()))
        );
    }

    #[test]
    fn database_store_requires_url() {
        let result = Config::from_map(&vars(&[
            ("DISCORD_TOKEN", "token"),
            ("EDIT_STORE", "database"),
        ]));

        assert_eq!(
            result.err(),
            Some(ConfigError::MissingEnvVar("DATABASE_URL".to_string()))
        );
    }

    #[test]
    fn selects_database_store() {
        let config = Config::from_map(&vars(&[
            ("DISCORD_TOKEN", "token"),
            ("EDIT_STORE", "database"),
            ("DATABASE_URL", "sqlite://edits.db?mode=rwc"),
        ]))
        .unwrap();

        assert_eq!(
            config.edit_store,
            EditStoreBackend::Database {
                url: "sqlite://edits.db?mode=rwc".to_string()
            }
        );
    }

    #[test]
    fn rejects_unknown_store() {
        let result = Config::from_map(&vars(&[
            ("DISCORD_TOKEN", "token"),
            ("EDIT_STORE", "redis"),
        ]));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvVar { ref name, .. }) if name == "EDIT_STORE"
        ));
    }

    #[test]
    fn parses_retention_bound() {
        let config = Config::from_map(&vars(&[
            ("DISCORD_TOKEN", "token"),
            ("EDIT_HISTORY_MAX_PER_MESSAGE", "25"),
        ]))
        .unwrap();

        assert_eq!(config.retention, RetentionPolicy::MaxPerMessage(25));
    }

    #[test]
    fn rejects_zero_and_non_numeric_retention() {
        for raw in ["0", "lots"] {
            let result = Config::from_map(&vars(&[
                ("DISCORD_TOKEN", "token"),
                ("EDIT_HISTORY_MAX_PER_MESSAGE", raw),
            ]));

            assert!(matches!(
                result,
                Err(ConfigError::InvalidEnvVar { ref name, .. })
                    if name == "EDIT_HISTORY_MAX_PER_MESSAGE"
            ));
        }
    }

    #[test]
    fn rejects_zero_dev_guild() {
        let result = Config::from_map(&vars(&[
            ("DISCORD_TOKEN", "token"),
            ("DEV_GUILD_ID", "0"),
        ]));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvVar { ref name, .. }) if name == "DEV_GUILD_ID"
        ));
    }

    #[test]
    fn parses_dev_guild_and_cache_size() {
        let config = Config::from_map(&vars(&[
            ("DISCORD_TOKEN", "token"),
            ("DEV_GUILD_ID", "1302224187024216175"),
            ("MESSAGE_CACHE_SIZE", "50"),
        ]))
        .unwrap();

        assert_eq!(config.dev_guild_id, Some(1302224187024216175));
        assert_eq!(config.message_cache_size, 50);
    }
}
