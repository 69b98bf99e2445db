//! Remote fetching of attachment bytes.
//!
//! Deleted attachments remain downloadable from Discord's CDN for a short while after
//! the message is gone. This module defines the `AttachmentFetcher` seam used by the
//! deletion log service and its reqwest-backed implementation.

use dioxus_logger::tracing;
use serenity::async_trait;

use crate::error::fetch::FetchError;

/// Retrieves the raw bytes behind an attachment URL.
#[async_trait]
pub trait AttachmentFetcher: Send + Sync {
    /// Downloads `url`.
    ///
    /// # Returns
    /// - `Ok(Vec<u8>)` - Response body of a successful request
    /// - `Err(FetchError)` - Network failure, timeout, or non-2xx response
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// Fetches attachments over HTTP with a shared reqwest client.
///
/// The client carries the configured timeout and redirect policy, see
/// `startup::setup_reqwest_client`.
#[derive(Clone)]
pub struct HttpAttachmentFetcher {
    http_client: reqwest::Client,
}

impl HttpAttachmentFetcher {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl AttachmentFetcher for HttpAttachmentFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| FetchError::from_reqwest(url, e))?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))?;

        tracing::debug!("Fetched {} bytes from {}", bytes.len(), url);

        Ok(bytes.to_vec())
    }
}
