mod composer;
mod config;
mod converter;
mod credential;
mod http;
mod links;
mod liveness;
mod markup;
mod platform;
mod relay;
mod replies;

#[cfg(test)]
mod test_support;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use teloxide::Bot;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::converter::HttpConverter;
use crate::credential::fetch_credential;
use crate::http::FetchError;
use crate::platform::telegram::{self, RelayState};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,terarelay=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration; without an explicit path a missing file means defaults
    let explicit_path = std::env::args().nth(1).map(PathBuf::from);
    let config_path = explicit_path
        .clone()
        .unwrap_or_else(|| PathBuf::from("config.toml"));

    info!("Loading configuration from: {}", config_path.display());
    let config = Config::load(&config_path, explicit_path.is_some())
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    info!("Configuration loaded successfully");
    info!("  Credential source: {}", config.credential.url);
    info!("  Converter: {}", config.converter.endpoint);
    info!("  Reply markup: {}", config.reply.markup);

    if config.liveness.enabled {
        liveness::spawn(config.liveness.bind.clone())?;
    }

    let (bot, state) = match prepare(reqwest::Client::new(), &config).await {
        Ok(prepared) => prepared,
        Err(e) => {
            error!("Error fetching bot token: {}", e);
            error!("Bot token is not available. Exiting.");
            std::process::exit(1);
        }
    };

    info!("Bot is running... 🚀");
    telegram::run(bot, Arc::new(state)).await?;

    Ok(())
}

/// Fetch the bot credential and build everything the dispatcher needs.
/// Nothing is built when the credential is unavailable.
async fn prepare(
    client: reqwest::Client,
    config: &Config,
) -> Result<(Bot, RelayState), FetchError> {
    let credential = fetch_credential(&client, &config.credential).await?;

    let state = RelayState {
        converter: Arc::new(HttpConverter::new(client, config.converter.clone())),
        markup: config.reply.markup,
    };

    Ok((Bot::new(credential.expose()), state))
}
