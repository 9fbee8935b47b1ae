mod bot;
mod config;
mod data;
mod error;
mod model;
mod service;
mod startup;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{bot::start::start_bot, config::Config, error::AppError};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,rawrbot=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let edit_store = startup::build_edit_store(&config).await?;

    start_bot(&config, edit_store).await?;

    tracing::info!("Discord bot stopped");

    Ok(())
}
