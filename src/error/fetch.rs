use thiserror::Error;

/// Failure to download an attachment's bytes from Discord's CDN.
///
/// Always scoped to a single attachment. The deletion log service reports it and
/// moves on to the next attachment of the same event.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The CDN answered with a non-success status code.
    #[error("Fetching {url} returned HTTP {status}")]
    Status {
        /// Requested attachment URL
        url: String,
        /// Status code returned by the server
        status: u16,
    },

    /// The request did not complete within the configured timeout.
    #[error("Fetching {url} timed out")]
    Timeout {
        /// Requested attachment URL
        url: String,
    },

    /// Connection, TLS or body read failure.
    #[error("Fetching {url} failed: {source}")]
    Request {
        /// Requested attachment URL
        url: String,
        /// The underlying reqwest error
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    /// Classifies a reqwest error raised while fetching `url`.
    pub fn from_reqwest(url: &str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            return Self::Timeout {
                url: url.to_string(),
            };
        }

        if let Some(status) = source.status() {
            return Self::Status {
                url: url.to_string(),
                status: status.as_u16(),
            };
        }

        Self::Request {
            url: url.to_string(),
            source,
        }
    }
}
