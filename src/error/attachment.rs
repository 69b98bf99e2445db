use thiserror::Error;

/// Attachment metadata rejected by the strict content type policy.
///
/// Only produced when classification runs with `ContentTypePolicy::Strict`; the
/// lenient policy files these attachments under "other" instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AttachmentError {
    /// Discord did not report a content type for the attachment.
    #[error("Attachment {url} has no content type")]
    MissingContentType {
        /// URL of the offending attachment
        url: String,
    },

    /// The reported content type is not of the `type/subtype` form.
    #[error("Attachment {url} has malformed content type '{content_type}'")]
    MalformedContentType {
        /// URL of the offending attachment
        url: String,
        /// The content type as reported
        content_type: String,
    },
}
