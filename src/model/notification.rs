//! Notification posted to a log channel for one deleted attachment.

use chrono::{DateTime, Utc};

/// Embed color used for every deletion notification.
pub const DELETION_EMBED_COLOR: u32 = 0xda0000;

/// Structured description of one deleted attachment.
///
/// Derived from exactly one `DeletionEvent` and one of its attachments. Rendering into
/// a Discord embed happens at the delivery boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRecord {
    /// Author line, `"<tag> (<id>)"`.
    pub author_name: String,
    /// Author avatar shown next to the author line.
    pub author_icon_url: String,
    /// Human-readable summary naming the category and the channel.
    pub description: String,
    /// Filename used for both the "File Name" field and the re-uploaded file.
    pub filename: String,
    /// Whether the attachment was classified as an image.
    pub is_image: bool,
    /// Markdown download link, only present for non-image files.
    pub download_link: Option<String>,
    /// Footer text carrying the deleted message's ID.
    pub footer: String,
    /// Creation time of the deleted message.
    pub timestamp: DateTime<Utc>,
}

impl NotificationRecord {
    /// `attachment://` reference that renders the re-uploaded image inside the embed.
    ///
    /// # Returns
    /// - `Some(String)` - For images
    /// - `None` - For other files, which are linked instead
    pub fn image_reference(&self) -> Option<String> {
        self.is_image
            .then(|| format!("attachment://{}", self.filename))
    }
}
