//! Delivery of deletion notifications into guild log channels.
//!
//! Defines the `LogChannelSender` seam used by the deletion log service and the
//! Serenity-backed implementation that renders a `NotificationRecord` into an embed
//! and re-uploads the attachment bytes alongside it.

use dioxus_logger::tracing;
use serenity::{
    all::{
        ChannelId, CreateAllowedMentions, CreateAttachment, CreateEmbed, CreateEmbedAuthor,
        CreateEmbedFooter, CreateMessage, Timestamp,
    },
    async_trait,
    http::Http,
};
use std::sync::Arc;

use crate::{
    error::{delivery::DeliveryError, internal::InternalError},
    model::notification::{NotificationRecord, DELETION_EMBED_COLOR},
};

/// Posts a notification and the re-uploaded file to a log channel.
#[async_trait]
pub trait LogChannelSender: Send + Sync {
    /// Sends `notification` with `file` attached as `filename` to `channel_id`.
    ///
    /// # Returns
    /// - `Ok(())` - Message posted
    /// - `Err(DeliveryError)` - Channel unavailable or Discord rejected the message
    async fn send(
        &self,
        channel_id: u64,
        notification: &NotificationRecord,
        file: Vec<u8>,
        filename: &str,
    ) -> Result<(), DeliveryError>;
}

/// Sends notifications through the bot's Discord HTTP client.
#[derive(Clone)]
pub struct DiscordLogChannel {
    http: Arc<Http>,
}

impl DiscordLogChannel {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl LogChannelSender for DiscordLogChannel {
    async fn send(
        &self,
        channel_id: u64,
        notification: &NotificationRecord,
        file: Vec<u8>,
        filename: &str,
    ) -> Result<(), DeliveryError> {
        // Resolve at send time; the channel may have been deleted since startup
        let channel = ChannelId::new(channel_id)
            .to_channel(&self.http)
            .await
            .map_err(|e| DeliveryError::ChannelUnavailable {
                channel_id,
                reason: e.to_string(),
            })?
            .guild()
            .ok_or_else(|| DeliveryError::ChannelUnavailable {
                channel_id,
                reason: "not a guild channel".to_string(),
            })?;

        let message = CreateMessage::new()
            .embed(build_deletion_embed(notification)?)
            .add_file(CreateAttachment::bytes(file, filename))
            .allowed_mentions(CreateAllowedMentions::new());

        channel
            .send_message(&self.http, message)
            .await
            .map_err(|e| DeliveryError::Send {
                channel_id,
                source: Box::new(e),
            })?;

        tracing::debug!(
            "Posted deletion log for {} to channel {} ({})",
            filename,
            channel_id,
            channel.name
        );

        Ok(())
    }
}

/// Builds the Discord embed for a deletion notification.
///
/// Red embed with the author line and avatar, the description, a "File Name" field,
/// and either the inline re-uploaded image or a "Download URL" field. The footer
/// carries the deleted message's ID and the timestamp is its creation time.
///
/// # Arguments
/// - `notification` - The notification to render
///
/// # Returns
/// - `Ok(CreateEmbed)` - Discord embed ready for posting
/// - `Err(InternalError::InvalidDiscordTimestamp)` - Creation time out of range
pub fn build_deletion_embed(
    notification: &NotificationRecord,
) -> Result<CreateEmbed, InternalError> {
    let unix = notification.timestamp.timestamp();
    let timestamp =
        Timestamp::from_unix_timestamp(unix).map_err(|e| InternalError::InvalidDiscordTimestamp {
            timestamp: unix,
            reason: e.to_string(),
        })?;

    let mut embed = CreateEmbed::new()
        .color(DELETION_EMBED_COLOR)
        .author(
            CreateEmbedAuthor::new(&notification.author_name)
                .icon_url(&notification.author_icon_url),
        )
        .description(&notification.description)
        .field("File Name", &notification.filename, false);

    if let Some(image) = notification.image_reference() {
        embed = embed.image(image);
    }

    if let Some(link) = &notification.download_link {
        embed = embed.field("Download URL", link, false);
    }

    Ok(embed
        .footer(CreateEmbedFooter::new(&notification.footer))
        .timestamp(timestamp))
}
