use dioxus_logger::tracing;
use std::time::Duration;

use crate::{config::Config, error::AppError};

/// Maximum redirects followed when downloading attachments from the CDN.
const MAX_FETCH_REDIRECTS: usize = 3;

/// Initializes the global tracing subscriber at the configured level.
///
/// # Arguments
/// - `config` - Application configuration containing the log level
pub fn setup_logging(config: &Config) {
    if let Err(e) = dioxus_logger::init(config.log_level) {
        // A subscriber is already installed, keep using it
        eprintln!("Failed to initialize logger: {}", e);
    }
}

/// Builds the HTTP client used to download deleted attachments.
///
/// The client applies the configured whole-request timeout, so a stalled CDN
/// response fails that attachment instead of holding up the rest of the event.
///
/// # Arguments
/// - `config` - Application configuration containing the fetch timeout
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured client, cheap to clone
/// - `Err(AppError::ReqwestErr)` - TLS backend could not be initialized
pub fn setup_reqwest_client(config: &Config) -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.fetch_timeout_secs))
        .redirect(reqwest::redirect::Policy::limited(MAX_FETCH_REDIRECTS))
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .build()?;

    tracing::debug!(
        "Attachment fetch client ready with {}s timeout",
        config.fetch_timeout_secs
    );

    Ok(client)
}
