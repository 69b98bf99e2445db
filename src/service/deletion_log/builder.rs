//! Deletion notification builder utilities.
//!
//! Pure helpers that turn one attachment of a deletion event into a
//! `NotificationRecord`. Shared by the deletion log service and its tests so the
//! formatting rules live in one place.

use crate::model::{
    attachment::Attachment, deletion::DeletionEvent, notification::NotificationRecord,
};

/// Filename used for non-image attachments that arrive without a name.
pub const UNKNOWN_FILE_NAME: &str = "unknown_file";

/// Extension used when an unnamed image has no usable content subtype.
const UNKNOWN_EXTENSION: &str = "unknown";

/// Position of an attachment among the attachments of its own category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryPosition {
    /// 1-based index in delivery order.
    pub index: usize,
    /// Number of attachments in the category.
    pub count: usize,
}

impl CategoryPosition {
    pub fn new(index: usize, count: usize) -> Self {
        Self { index, count }
    }

    fn is_numbered(&self) -> bool {
        self.count > 1
    }
}

/// Resolves the filename used for the log message and the re-uploaded file.
///
/// Uses the attachment's own name when present. Unnamed images are called
/// `deleted_image.<ext>`, or `deleted_image_<N>.<ext>` when their category holds more
/// than one attachment so `attachment://` references stay unique within a message
/// burst. Unnamed non-images fall back to `unknown_file`.
///
/// # Arguments
/// - `attachment` - The attachment to name
/// - `is_image` - Category the attachment was classified into
/// - `position` - Index and count within that category
///
/// # Returns
/// - `String` - The resolved filename
pub fn resolve_filename(
    attachment: &Attachment,
    is_image: bool,
    position: CategoryPosition,
) -> String {
    if let Some(name) = &attachment.name {
        return name.clone();
    }

    if !is_image {
        return UNKNOWN_FILE_NAME.to_string();
    }

    let extension = attachment
        .content_type
        .as_deref()
        .and_then(extension_from_content_type)
        .unwrap_or(UNKNOWN_EXTENSION);

    if position.is_numbered() {
        format!("deleted_image_{}.{}", position.index, extension)
    } else {
        format!("deleted_image.{}", extension)
    }
}

/// Extracts a file extension from a MIME subtype.
///
/// Parameters and structured syntax suffixes are dropped, so `image/svg+xml` yields
/// `svg` and `image/png; q=1` yields `png`.
fn extension_from_content_type(content_type: &str) -> Option<&str> {
    let essence = content_type.split(';').next()?.trim();
    let (_, subtype) = essence.split_once('/')?;
    let extension = subtype.split('+').next()?.trim();

    (!extension.is_empty()).then_some(extension)
}

/// Builds the notification describing one deleted attachment.
///
/// The description always names the category and the originating channel, and is
/// numbered `N of M` when the category holds more than one attachment. Images are
/// rendered inline from the re-uploaded file, other files additionally get a
/// download link to the original CDN URL. The timestamp is the deleted message's
/// creation time.
///
/// # Arguments
/// - `event` - The deletion event the attachment belongs to
/// - `attachment` - The attachment being reported
/// - `filename` - Name resolved by `resolve_filename`
/// - `is_image` - Category the attachment was classified into
/// - `position` - Index and count within that category
///
/// # Returns
/// - `NotificationRecord` - Notification ready to be delivered
pub fn build_notification(
    event: &DeletionEvent,
    attachment: &Attachment,
    filename: &str,
    is_image: bool,
    position: CategoryPosition,
) -> NotificationRecord {
    let kind = if is_image { "Image" } else { "File" };
    let description = if position.is_numbered() {
        format!(
            "{} {} of {} deleted in {}.",
            kind,
            position.index,
            position.count,
            event.channel_mention()
        )
    } else {
        format!("{} deleted in {}.", kind, event.channel_mention())
    };

    let download_link = (!is_image).then(|| format!("[{}]({})", filename, attachment.url));

    NotificationRecord {
        author_name: format!("{} ({})", event.author.tag, event.author.id),
        author_icon_url: event.author.avatar_url.clone(),
        description,
        filename: filename.to_string(),
        is_image,
        download_link,
        footer: format!("Message ID: {}", event.message_id),
        timestamp: event.created_at,
    }
}
