//! Deletion log service for re-uploading deleted attachments.
//!
//! This module orchestrates everything that happens once a deleted guild message and
//! its attachments are handed over by the bot: destination lookup, the once-per-guild
//! warning for unconfigured guilds, classification, and the sequential fetch, build,
//! deliver loop.
//!
//! # Ordering
//!
//! Images are processed before other files and each category in delivery order. All
//! work for one event is awaited sequentially so the `N of M` numbering matches the
//! order messages appear in the log channel.
//!
//! # Failure isolation
//!
//! An attachment rejected by the strict content type policy, a failed fetch and a
//! failed delivery are each logged and skipped. None of them aborts sibling
//! attachments, the event, or the host process.

pub mod builder;
pub mod classify;
pub mod warned;

#[cfg(test)]
mod test;

use dioxus_logger::tracing;
use std::sync::Arc;

use crate::{
    error::AppError,
    model::{attachment::Attachment, deletion::DeletionEvent, destination::DestinationMap},
    service::{delivery::LogChannelSender, fetch::AttachmentFetcher},
};

use self::{
    builder::{build_notification, resolve_filename, CategoryPosition},
    classify::{classify_attachments, ContentTypePolicy},
    warned::WarnedGuilds,
};

/// How a single deletion event ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeletionOutcome {
    /// The message carried no attachments; nothing was looked up or sent.
    NoAttachments,
    /// The guild has no configured log channel.
    NoDestination {
        /// Whether this event emitted the guild's one-time warning.
        warned: bool,
    },
    /// Every attachment was attempted.
    Processed {
        /// Notifications posted successfully.
        delivered: usize,
        /// Attachments rejected by classification or whose fetch or delivery failed.
        failed: usize,
    },
}

/// Service re-uploading the attachments of deleted messages to log channels.
///
/// Cheap to clone; clones share the warned guild set and the fetch/delivery backends,
/// so one instance can serve every concurrently arriving deletion event.
#[derive(Clone)]
pub struct DeletionLogService {
    /// Guild to log channel mapping from configuration
    destinations: Arc<DestinationMap>,
    /// Guilds that already produced the missing log channel warning
    warned_guilds: WarnedGuilds,
    /// Downloads attachment bytes
    fetcher: Arc<dyn AttachmentFetcher>,
    /// Posts notifications to log channels
    sender: Arc<dyn LogChannelSender>,
    /// Treatment of missing or malformed content types
    policy: ContentTypePolicy,
}

impl DeletionLogService {
    /// Creates a new DeletionLogService instance.
    ///
    /// # Arguments
    /// - `destinations` - Guild to log channel mapping
    /// - `warned_guilds` - Warning state, injected so tests get an isolated set
    /// - `fetcher` - Attachment download backend
    /// - `sender` - Log channel delivery backend
    /// - `policy` - Content type policy for classification
    ///
    /// # Returns
    /// - `DeletionLogService` - New service instance
    pub fn new(
        destinations: Arc<DestinationMap>,
        warned_guilds: WarnedGuilds,
        fetcher: Arc<dyn AttachmentFetcher>,
        sender: Arc<dyn LogChannelSender>,
        policy: ContentTypePolicy,
    ) -> Self {
        Self {
            destinations,
            warned_guilds,
            fetcher,
            sender,
            policy,
        }
    }

    /// Handles one deleted message.
    ///
    /// Messages without attachments return immediately. Guilds without a configured
    /// log channel get a single warning per process lifetime and are otherwise ignored.
    /// For configured guilds every attachment is fetched, described and re-uploaded,
    /// images first, strictly one after another.
    ///
    /// # Arguments
    /// - `event` - The deleted message and its attachments
    ///
    /// # Returns
    /// - `DeletionOutcome` - Summary of what happened; failures are already logged
    pub async fn handle_deletion(&self, event: DeletionEvent) -> DeletionOutcome {
        if event.attachments.is_empty() {
            return DeletionOutcome::NoAttachments;
        }

        let Some(channel_id) = self.destinations.channel_for(event.guild_id) else {
            let warned = self.warned_guilds.mark_warned(event.guild_id).await;
            if warned {
                tracing::warn!(
                    "Received a message deletion in guild {}, but no log channel is \
                     configured. Add \"{}\" to LOG_CHANNELS with the ID of the channel \
                     that should receive file deletion logs. This warning will not be \
                     repeated for this guild until restart.",
                    event.guild_id,
                    event.guild_id
                );
            }
            return DeletionOutcome::NoDestination { warned };
        };

        let classified = classify_attachments(event.attachments.clone(), self.policy);

        tracing::debug!(
            "Logging {} image(s) and {} other file(s) from message {}, {} rejected",
            classified.images.len(),
            classified.others.len(),
            event.message_id,
            classified.rejected.len()
        );

        let mut delivered = 0;
        let mut failed = 0;

        for (attachment, e) in &classified.rejected {
            tracing::error!(
                "Skipping deleted attachment {} of message {} in guild {}: {}",
                attachment.url,
                event.message_id,
                event.guild_id,
                e
            );
            failed += 1;
        }

        for (is_image, category) in [(true, &classified.images), (false, &classified.others)] {
            for (i, attachment) in category.iter().enumerate() {
                let position = CategoryPosition::new(i + 1, category.len());

                match self
                    .log_attachment(&event, attachment, is_image, position, channel_id)
                    .await
                {
                    Ok(()) => delivered += 1,
                    Err(e) => {
                        tracing::error!(
                            "Failed to log deleted attachment {} of message {} in guild {}: {}",
                            attachment.url,
                            event.message_id,
                            event.guild_id,
                            e
                        );
                        failed += 1;
                    }
                }
            }
        }

        DeletionOutcome::Processed { delivered, failed }
    }

    /// Fetches, describes and delivers a single attachment.
    async fn log_attachment(
        &self,
        event: &DeletionEvent,
        attachment: &Attachment,
        is_image: bool,
        position: CategoryPosition,
        channel_id: u64,
    ) -> Result<(), AppError> {
        let bytes = self.fetcher.fetch(&attachment.url).await?;

        let filename = resolve_filename(attachment, is_image, position);
        let notification = build_notification(event, attachment, &filename, is_image, position);

        self.sender
            .send(channel_id, &notification, bytes, &filename)
            .await?;

        tracing::info!(
            "Logged deleted {} {} from message {} to channel {}",
            if is_image { "image" } else { "file" },
            filename,
            event.message_id,
            channel_id
        );

        Ok(())
    }
}
