//! Attachment classification into images and other files.

use crate::{error::attachment::AttachmentError, model::attachment::Attachment};

/// How to treat attachments whose content type is absent or malformed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContentTypePolicy {
    /// File such attachments under "other".
    #[default]
    Lenient,
    /// Reject such attachments individually with an `AttachmentError`.
    Strict,
}

/// Attachments of one event split by category, each in original relative order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedAttachments {
    pub images: Vec<Attachment>,
    pub others: Vec<Attachment>,
    /// Attachments refused by the strict policy, with the reason.
    pub rejected: Vec<(Attachment, AttachmentError)>,
}

#[cfg(test)]
impl ClassifiedAttachments {
    pub fn len(&self) -> usize {
        self.images.len() + self.others.len() + self.rejected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partitions attachments into images, other files and rejected attachments.
///
/// An attachment is an image when its content type starts with the literal `image`
/// prefix. Every input attachment ends up in exactly one of the three lists; the
/// rejected list stays empty under the lenient policy.
///
/// # Arguments
/// - `attachments` - Attachments in platform-delivered order
/// - `policy` - Whether a missing or malformed content type is an error
///
/// # Returns
/// - `ClassifiedAttachments` - The partition
pub fn classify_attachments(
    attachments: Vec<Attachment>,
    policy: ContentTypePolicy,
) -> ClassifiedAttachments {
    let mut classified = ClassifiedAttachments::default();

    for attachment in attachments {
        if policy == ContentTypePolicy::Strict {
            if let Err(e) = validate_content_type(&attachment) {
                classified.rejected.push((attachment, e));
                continue;
            }
        }

        if attachment.is_image() {
            classified.images.push(attachment);
        } else {
            classified.others.push(attachment);
        }
    }

    classified
}

/// Requires a content type of the `type/subtype` form.
fn validate_content_type(attachment: &Attachment) -> Result<(), AttachmentError> {
    let Some(content_type) = attachment.content_type.as_deref() else {
        return Err(AttachmentError::MissingContentType {
            url: attachment.url.clone(),
        });
    };

    let essence = content_type.split(';').next().unwrap_or_default().trim();
    match essence.split_once('/') {
        Some((kind, subtype)) if !kind.is_empty() && !subtype.is_empty() => Ok(()),
        _ => Err(AttachmentError::MalformedContentType {
            url: attachment.url.clone(),
            content_type: content_type.to_string(),
        }),
    }
}
