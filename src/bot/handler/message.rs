//! Message deletion handlers.
//!
//! Discord's delete events only carry IDs, so the deleted message is recovered from
//! Serenity's message cache. Messages that were never cached (posted before the bot
//! started, or evicted) and direct messages cannot be logged and are skipped.

use dioxus_logger::tracing;
use serenity::all::{ChannelId, Context, GuildId, MessageId};

use crate::{
    model::deletion::DeletionEvent,
    service::deletion_log::{DeletionLogService, DeletionOutcome},
};

/// Handles the message_delete event.
///
/// # Arguments
/// - `service` - Deletion log service for this event
/// - `ctx` - Discord context holding the message cache
/// - `channel_id` - Channel the message was deleted from
/// - `deleted_message_id` - ID of the deleted message
/// - `guild_id` - Guild of the channel, `None` for direct messages
pub async fn handle_message_delete(
    service: &DeletionLogService,
    ctx: Context,
    channel_id: ChannelId,
    deleted_message_id: MessageId,
    guild_id: Option<GuildId>,
) {
    if guild_id.is_none() {
        return;
    }

    let Some(event) = cached_deletion_event(&ctx, channel_id, deleted_message_id) else {
        return;
    };

    log_deletion(service, event).await;
}

/// Handles the message_delete_bulk event.
///
/// Each cached message is logged as its own deletion, one after another, so log
/// channel order follows the order Discord reported the IDs in.
///
/// # Arguments
/// - `service` - Deletion log service for this event
/// - `ctx` - Discord context holding the message cache
/// - `channel_id` - Channel the messages were deleted from
/// - `deleted_message_ids` - IDs of the deleted messages
/// - `guild_id` - Guild of the channel
pub async fn handle_message_delete_bulk(
    service: &DeletionLogService,
    ctx: Context,
    channel_id: ChannelId,
    deleted_message_ids: Vec<MessageId>,
    guild_id: Option<GuildId>,
) {
    if guild_id.is_none() {
        return;
    }

    tracing::debug!(
        "Bulk deletion of {} messages in channel {}",
        deleted_message_ids.len(),
        channel_id
    );

    for message_id in deleted_message_ids {
        let Some(event) = cached_deletion_event(&ctx, channel_id, message_id) else {
            continue;
        };

        log_deletion(service, event).await;
    }
}

/// Recovers the deleted message from the cache and converts it.
///
/// The cache reference is released before returning so it is never held across an
/// await point.
fn cached_deletion_event(
    ctx: &Context,
    channel_id: ChannelId,
    message_id: MessageId,
) -> Option<DeletionEvent> {
    let Some(message) = ctx.cache.message(channel_id, message_id) else {
        tracing::debug!(
            "Deleted message {} in channel {} was not cached, skipping",
            message_id,
            channel_id
        );
        return None;
    };

    DeletionEvent::from_serenity(&message)
}

/// Runs the deletion log pipeline and logs how it ended.
async fn log_deletion(service: &DeletionLogService, event: DeletionEvent) {
    let message_id = event.message_id;
    let guild_id = event.guild_id;

    match service.handle_deletion(event).await {
        DeletionOutcome::Processed { delivered, failed } => tracing::debug!(
            "Deletion of message {} in guild {}: {} attachment(s) logged, {} failed",
            message_id,
            guild_id,
            delivered,
            failed
        ),
        DeletionOutcome::NoAttachments | DeletionOutcome::NoDestination { .. } => {}
    }
}
