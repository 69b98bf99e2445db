use serenity::all::{ChannelId, Context, EventHandler, GuildId, MessageId, Ready};
use serenity::async_trait;
use std::sync::Arc;

use crate::{
    model::destination::DestinationMap,
    service::{
        deletion_log::{classify::ContentTypePolicy, warned::WarnedGuilds, DeletionLogService},
        delivery::DiscordLogChannel,
        fetch::AttachmentFetcher,
    },
};

pub mod message;
pub mod ready;

/// Discord bot event handler
///
/// Holds the state that must outlive a single event: the configured log channels,
/// the set of guilds already warned about a missing log channel, and the attachment
/// fetcher. A `DeletionLogService` is assembled per event around the context's HTTP
/// client.
pub struct Handler {
    pub log_channels: Arc<DestinationMap>,
    pub warned_guilds: WarnedGuilds,
    pub fetcher: Arc<dyn AttachmentFetcher>,
    pub content_type_policy: ContentTypePolicy,
}

impl Handler {
    pub fn new(
        log_channels: Arc<DestinationMap>,
        fetcher: Arc<dyn AttachmentFetcher>,
        content_type_policy: ContentTypePolicy,
    ) -> Self {
        Self {
            log_channels,
            warned_guilds: WarnedGuilds::new(),
            fetcher,
            content_type_policy,
        }
    }

    /// Creates the deletion log service delivering through `ctx`'s HTTP client.
    fn deletion_log_service(&self, ctx: &Context) -> DeletionLogService {
        DeletionLogService::new(
            self.log_channels.clone(),
            self.warned_guilds.clone(),
            self.fetcher.clone(),
            Arc::new(DiscordLogChannel::new(ctx.http.clone())),
            self.content_type_policy,
        )
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a message is deleted
    async fn message_delete(
        &self,
        ctx: Context,
        channel_id: ChannelId,
        deleted_message_id: MessageId,
        guild_id: Option<GuildId>,
    ) {
        let service = self.deletion_log_service(&ctx);
        message::handle_message_delete(&service, ctx, channel_id, deleted_message_id, guild_id)
            .await;
    }

    /// Called when several messages are deleted at once (moderation purges)
    async fn message_delete_bulk(
        &self,
        ctx: Context,
        channel_id: ChannelId,
        multiple_deleted_messages_ids: Vec<MessageId>,
        guild_id: Option<GuildId>,
    ) {
        let service = self.deletion_log_service(&ctx);
        message::handle_message_delete_bulk(
            &service,
            ctx,
            channel_id,
            multiple_deleted_messages_ids,
            guild_id,
        )
        .await;
    }
}
