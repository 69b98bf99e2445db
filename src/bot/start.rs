use dioxus_logger::tracing;
use serenity::all::{Client, GatewayIntents};
use serenity::cache::Settings as CacheSettings;
use std::sync::Arc;

use crate::bot::handler::Handler;
use crate::config::Config;
use crate::error::AppError;
use crate::service::fetch::HttpAttachmentFetcher;

/// Initializes the Discord bot client.
///
/// Configures gateway intents, sizes the per-channel message cache that deleted
/// messages are recovered from, and wires the event handler with the configured log
/// channels and the attachment fetcher.
///
/// # Arguments
/// - `config` - Application configuration
/// - `http_client` - Shared reqwest client for attachment downloads
///
/// # Returns
/// - `Ok(Client)` - Bot client ready to be started
/// - `Err(AppError)` - Client construction failed (e.g. malformed token)
pub async fn init_bot(config: &Config, http_client: reqwest::Client) -> Result<Client, AppError> {
    // MESSAGE_CONTENT is a privileged intent - must be enabled in Discord Developer Portal
    let intents =
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT;

    let mut cache_settings = CacheSettings::default();
    cache_settings.max_messages = config.message_cache_size;

    let handler = Handler::new(
        Arc::new(config.log_channels.clone()),
        Arc::new(HttpAttachmentFetcher::new(http_client)),
        config.content_type_policy,
    );

    let client = Client::builder(&config.discord_bot_token, intents)
        .cache_settings(cache_settings)
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Starts the Discord bot in a blocking manner
///
/// Runs the gateway connection until shutdown.
///
/// # Arguments
/// - `client` - Client created by `init_bot`
///
/// # Returns
/// - `Ok(())` if the bot runs and shuts down cleanly
/// - `Err(AppError)` if the gateway connection fails
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
