// ==============================
// src/validation.rs
// ==============================
#![forbid(unsafe_code)]

use crate::error::RecordStoreError;

/// Both limits are encoded UTF-8 byte lengths, not character counts: a topic
/// of seventeen 3-byte characters is 51 bytes and is rejected.
pub const MAX_TOPIC_BYTES: usize = 50;
pub const MAX_CONTENT_BYTES: usize = 280;

/// Topic is optional; only the upper bound is enforced.
pub fn validate_topic(topic: &str) -> Result<(), RecordStoreError> {
    if topic.len() > MAX_TOPIC_BYTES {
        return Err(RecordStoreError::TopicTooLong);
    }
    Ok(())
}

/// Content is mandatory: empty content is rejected alongside oversized
/// content, with the same error code.
pub fn validate_content(content: &str) -> Result<(), RecordStoreError> {
    if content.is_empty() || content.len() > MAX_CONTENT_BYTES {
        return Err(RecordStoreError::ContentTooLong);
    }
    Ok(())
}
