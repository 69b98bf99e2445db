mod bot;
mod config;
mod error;
mod model;
mod service;
mod startup;
mod util;

use dioxus_logger::tracing;

use crate::{config::Config, error::AppError};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    startup::setup_logging(&config);

    let http_client = startup::setup_reqwest_client(&config)?;

    if config.log_channels.is_empty() {
        tracing::warn!("LOG_CHANNELS is empty, deleted attachments will not be logged anywhere");
    } else {
        tracing::info!(
            "Logging deleted attachments for {} configured guild(s)",
            config.log_channels.len()
        );
    }

    let client = bot::start::init_bot(&config, http_client).await?;

    if let Err(e) = bot::start::start_bot(client).await {
        tracing::error!("Discord bot error: {}", e);
        return Err(e);
    }

    Ok(())
}
