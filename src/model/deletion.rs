//! Domain model for a deleted guild message.

use chrono::{DateTime, Utc};
use serenity::all::Message;

use super::attachment::Attachment;

/// Author of a deleted message as displayed in the log embed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageAuthor {
    /// Discord user ID of the author.
    pub id: u64,
    /// Display tag, `name` or legacy `name#1234`.
    pub tag: String,
    /// Avatar URL, falling back to Discord's default avatar.
    pub avatar_url: String,
}

/// A guild message that was deleted, together with the attachments it carried.
///
/// Immutable once received. Attachment order is the order Discord delivered them in
/// and drives the per-category numbering of notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionEvent {
    /// ID of the deleted message.
    pub message_id: u64,
    /// When the message was originally posted, not when it was deleted.
    pub created_at: DateTime<Utc>,
    /// Who posted the message.
    pub author: MessageAuthor,
    /// Channel the message was posted in.
    pub channel_id: u64,
    /// Guild the message was posted in.
    pub guild_id: u64,
    /// Attachments in platform-delivered order.
    pub attachments: Vec<Attachment>,
}

impl DeletionEvent {
    /// Converts a cached Serenity message at the bot handler boundary.
    ///
    /// # Arguments
    /// - `message` - The cached copy of the message that was deleted
    ///
    /// # Returns
    /// - `Some(DeletionEvent)` - The message was posted in a guild
    /// - `None` - The message was a direct message, which has no log channel
    pub fn from_serenity(message: &Message) -> Option<Self> {
        let guild_id = message.guild_id?;

        Some(Self {
            message_id: message.id.get(),
            created_at: message.timestamp.to_utc(),
            author: MessageAuthor {
                id: message.author.id.get(),
                tag: message.author.tag(),
                avatar_url: message.author.face(),
            },
            channel_id: message.channel_id.get(),
            guild_id: guild_id.get(),
            attachments: message
                .attachments
                .iter()
                .map(Attachment::from_serenity)
                .collect(),
        })
    }

    /// Channel mention that renders as `#channel-name` inside Discord.
    pub fn channel_mention(&self) -> String {
        format!("<#{}>", self.channel_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::serenity::{create_test_attachment, create_test_message, create_test_user};

    /// Tests converting a guild message with attachments.
    ///
    /// Verifies that ids, author display info and attachments survive the conversion
    /// in their original order.
    ///
    /// Expected: Some with all fields mapped
    #[test]
    fn converts_guild_message() {
        let message = create_test_message(
            900,
            300,
            Some(100),
            create_test_user(42, "alice"),
            vec![
                create_test_attachment(1, "cat.png", Some("image/png")),
                create_test_attachment(2, "notes.txt", None),
            ],
        );

        let event = DeletionEvent::from_serenity(&message).unwrap();

        assert_eq!(event.message_id, 900);
        assert_eq!(event.channel_id, 300);
        assert_eq!(event.guild_id, 100);
        assert_eq!(event.author.id, 42);
        assert_eq!(event.author.tag, "alice");
        assert!(!event.author.avatar_url.is_empty());
        assert_eq!(event.created_at.timestamp(), 1_577_836_800);
        assert_eq!(event.attachments.len(), 2);
        assert_eq!(event.attachments[0].name.as_deref(), Some("cat.png"));
        assert_eq!(
            event.attachments[0].content_type.as_deref(),
            Some("image/png")
        );
        assert_eq!(event.attachments[1].content_type, None);
    }

    /// Tests that direct messages are not converted.
    ///
    /// Expected: None since DMs have no guild and therefore no log channel
    #[test]
    fn skips_direct_messages() {
        let author = create_test_user(42, "alice");
        let message = create_test_message(900, 300, None, author, vec![]);

        assert!(DeletionEvent::from_serenity(&message).is_none());
    }

    #[test]
    fn renders_channel_mention() {
        let author = create_test_user(42, "alice");
        let message = create_test_message(900, 300, Some(100), author, vec![]);
        let event = DeletionEvent::from_serenity(&message).unwrap();

        assert_eq!(event.channel_mention(), "<#300>");
    }
}
