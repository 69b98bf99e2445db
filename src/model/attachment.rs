//! Domain model for attachments bound to a deleted message.

/// A file that was attached to a deleted message.
///
/// Carries no identifier of its own and only lives for the duration of one deletion
/// event. The URL keeps working on Discord's CDN for a short while after the message
/// is gone, which is what makes re-uploading possible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// CDN URL the attachment bytes are fetched from.
    pub url: String,
    /// Original filename, `None` when Discord did not report one.
    pub name: Option<String>,
    /// Declared MIME type such as `image/png`; may be absent or malformed.
    pub content_type: Option<String>,
}

impl Attachment {
    /// Converts a Serenity attachment at the bot handler boundary.
    ///
    /// Empty filenames and content types are normalized to `None`.
    pub fn from_serenity(attachment: &serenity::all::Attachment) -> Self {
        Self {
            url: attachment.url.clone(),
            name: Some(attachment.filename.clone()).filter(|name| !name.trim().is_empty()),
            content_type: attachment
                .content_type
                .clone()
                .filter(|content_type| !content_type.trim().is_empty()),
        }
    }

    /// Whether the declared content type starts with the literal `image` prefix.
    pub fn is_image(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|content_type| content_type.starts_with("image"))
    }
}
