use thiserror::Error;

use crate::error::internal::InternalError;

/// Failure to post a notification into a guild's log channel.
///
/// Scoped to a single attachment and never retried.
#[derive(Error, Debug)]
pub enum DeliveryError {
    /// The configured channel could not be resolved to a live guild channel.
    ///
    /// Typically the channel was deleted or the bot lost access to it.
    #[error("Log channel {channel_id} is unavailable: {reason}")]
    ChannelUnavailable {
        /// The configured log channel id
        channel_id: u64,
        /// Why the channel could not be used
        reason: String,
    },

    /// Discord rejected the message (permissions, payload size, etc.).
    #[error("Failed to send to log channel {channel_id}: {source}")]
    Send {
        /// The configured log channel id
        channel_id: u64,
        /// The underlying Serenity error
        #[source]
        source: Box<serenity::Error>,
    },

    /// The notification could not be rendered into a Discord embed.
    #[error(transparent)]
    Render(#[from] InternalError),
}
