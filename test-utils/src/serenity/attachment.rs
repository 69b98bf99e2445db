//! Test factory for creating Serenity Attachment objects.

use serenity::all::Attachment;

/// Creates a test Serenity Attachment hosted on Discord's CDN.
///
/// The URL is derived from the attachment ID and filename the same way Discord
/// builds CDN links, so tests can assert on it.
///
/// # Arguments
/// - `attachment_id` - Discord attachment ID (snowflake)
/// - `filename` - Filename as uploaded
/// - `content_type` - Declared MIME type, `None` when Discord omitted it
///
/// # Returns
/// - `Attachment` - A valid Serenity Attachment struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into an Attachment (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::attachment::create_test_attachment;
///
/// let image = create_test_attachment(1, "cat.png", Some("image/png"));
/// let unknown = create_test_attachment(2, "blob", None);
/// ```
pub fn create_test_attachment(
    attachment_id: u64,
    filename: &str,
    content_type: Option<&str>,
) -> Attachment {
    serde_json::from_value(attachment_json(attachment_id, filename, content_type))
        .expect("Failed to create test attachment - invalid JSON structure")
}

pub(crate) fn attachment_json(
    attachment_id: u64,
    filename: &str,
    content_type: Option<&str>,
) -> serde_json::Value {
    let url = format!(
        "https://cdn.discordapp.com/attachments/300/{}/{}",
        attachment_id, filename
    );

    serde_json::json!({
        "id": attachment_id.to_string(),
        "filename": filename,
        "size": 1024,
        "url": url,
        "proxy_url": url.replace("cdn.discordapp.com", "media.discordapp.net"),
        "content_type": content_type,
    })
}
