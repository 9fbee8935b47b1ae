use std::sync::Arc;

use serenity::all::{Client, GatewayIntents, GuildId};
use serenity::cache::Settings as CacheSettings;

use crate::bot::handler::Handler;
use crate::config::Config;
use crate::data::edit_log::EditLogStore;
use crate::error::AppError;

/// Starts the Discord bot and runs it until shutdown.
///
/// Builds the Serenity client with a message cache large enough that the previous content
/// of recently edited messages is available on update events. A background task shuts all
/// shards down on Ctrl-C, which makes `client.start()` return.
///
/// # Arguments
/// - `config` - Application configuration
/// - `edit_store` - Edit log backend shared by all event handlers
///
/// # Returns
/// - `Ok(())` if the bot ran and shut down cleanly
/// - `Err(AppError)` if bot initialization or connection fails
pub async fn start_bot(config: &Config, edit_store: Arc<dyn EditLogStore>) -> Result<(), AppError> {
    // MESSAGE_CONTENT is a privileged intent - must be enabled in Discord Developer Portal
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let mut cache_settings = CacheSettings::default();
    cache_settings.max_messages = config.message_cache_size;

    let handler = Handler::new(edit_store, config.dev_guild_id.map(GuildId::new));

    let mut client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .cache_settings(cache_settings)
        .await?;

    // Shut down on Ctrl-C
    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for shutdown signal: {}", e);
            return;
        }

        tracing::info!("Shutting down Discord bot");
        shard_manager.shutdown_all().await;
    });

    tracing::info!(
        "Starting Discord bot (message cache: {} per channel)",
        config.message_cache_size
    );

    client.start().await?;

    Ok(())
}
