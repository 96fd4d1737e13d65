// ==============================
// src/state.rs  (BYTE-EXACT layout per Record Layout v1)
// ==============================
#![forbid(unsafe_code)]

use solana_program::{program_error::ProgramError, pubkey::Pubkey};

use crate::error::RecordStoreError;

/// Record Layout v1. These offsets are a public contract: offset-based account
/// filters (see `crate::filter`) match against them, so reordering or resizing
/// any field is a breaking layout change.
///
/// | offset | size | field                        |
/// |--------|------|------------------------------|
/// | 0      | 8    | discriminator `b"recstore"`  |
/// | 8      | 32   | author                       |
/// | 40     | 8    | timestamp (i64 LE)           |
/// | 48     | 4    | topic byte length (u32 LE)   |
/// | 52     | n    | topic (UTF-8)                |
/// | 52+n   | 4    | content byte length (u32 LE) |
/// | 56+n   | m    | content (UTF-8)              |
pub const RECORD_DISCRIMINATOR: [u8; 8] = *b"recstore";

pub const DISCRIMINATOR_SIZE: usize = 8;
pub const AUTHOR_OFFSET: usize = DISCRIMINATOR_SIZE; // 8
pub const TIMESTAMP_OFFSET: usize = AUTHOR_OFFSET + 32; // 40
pub const TOPIC_LEN_OFFSET: usize = TIMESTAMP_OFFSET + 8; // 48
pub const TOPIC_OFFSET: usize = TOPIC_LEN_OFFSET + 4; // 52
pub const LEN_PREFIX_SIZE: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub author: Pubkey,  // 8..40, immutable after creation
    pub timestamp: i64,  // 40..48, unix seconds, immutable after creation
    pub topic: String,   // u32 LE byte length at 48, bytes from 52
    pub content: String, // u32 LE byte length, then bytes
}

impl Record {
    /// Exact serialized size. Storage cells are allocated to exactly this many
    /// bytes at creation and reallocated to it on update.
    pub fn encoded_len(&self) -> usize {
        DISCRIMINATOR_SIZE
            + 32
            + 8
            + LEN_PREFIX_SIZE
            + self.topic.len()
            + LEN_PREFIX_SIZE
            + self.content.len()
    }

    /// Decodes a record cell. Any deviation from Record Layout v1 — wrong
    /// discriminator, truncation, a length prefix overrunning the buffer,
    /// trailing bytes, or invalid UTF-8 — is a `CorruptRecord` failure, never
    /// a partial read.
    pub fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        if input.len() < TOPIC_OFFSET {
            return Err(RecordStoreError::CorruptRecord.into());
        }
        if input[..DISCRIMINATOR_SIZE] != RECORD_DISCRIMINATOR {
            return Err(RecordStoreError::CorruptRecord.into());
        }

        let author = Pubkey::new_from_array(
            input[AUTHOR_OFFSET..TIMESTAMP_OFFSET]
                .try_into()
                .map_err(|_| RecordStoreError::CorruptRecord)?,
        );
        let timestamp = i64::from_le_bytes(
            input[TIMESTAMP_OFFSET..TOPIC_LEN_OFFSET]
                .try_into()
                .map_err(|_| RecordStoreError::CorruptRecord)?,
        );

        let topic_len = u32::from_le_bytes(
            input[TOPIC_LEN_OFFSET..TOPIC_OFFSET]
                .try_into()
                .map_err(|_| RecordStoreError::CorruptRecord)?,
        ) as usize;
        let content_len_offset = TOPIC_OFFSET
            .checked_add(topic_len)
            .ok_or(RecordStoreError::CorruptRecord)?;
        if input.len() < content_len_offset + LEN_PREFIX_SIZE {
            return Err(RecordStoreError::CorruptRecord.into());
        }

        let content_offset = content_len_offset + LEN_PREFIX_SIZE;
        let content_len = u32::from_le_bytes(
            input[content_len_offset..content_offset]
                .try_into()
                .map_err(|_| RecordStoreError::CorruptRecord)?,
        ) as usize;
        if input.len() != content_offset + content_len {
            return Err(RecordStoreError::CorruptRecord.into());
        }

        let topic = core::str::from_utf8(&input[TOPIC_OFFSET..content_len_offset])
            .map_err(|_| RecordStoreError::CorruptRecord)?
            .to_string();
        let content = core::str::from_utf8(&input[content_offset..])
            .map_err(|_| RecordStoreError::CorruptRecord)?
            .to_string();

        Ok(Self { author, timestamp, topic, content })
    }

    /// Packs into a cell sized exactly to `encoded_len()`; anything else would
    /// leave trailing bytes that `unpack` rejects.
    pub fn pack(&self, output: &mut [u8]) -> Result<(), ProgramError> {
        if output.len() != self.encoded_len() {
            return Err(ProgramError::InvalidAccountData);
        }

        let topic_end = TOPIC_OFFSET + self.topic.len();

        output[..DISCRIMINATOR_SIZE].copy_from_slice(&RECORD_DISCRIMINATOR);
        output[AUTHOR_OFFSET..TIMESTAMP_OFFSET].copy_from_slice(self.author.as_ref());
        output[TIMESTAMP_OFFSET..TOPIC_LEN_OFFSET].copy_from_slice(&self.timestamp.to_le_bytes());

        output[TOPIC_LEN_OFFSET..TOPIC_OFFSET]
            .copy_from_slice(&(self.topic.len() as u32).to_le_bytes());
        output[TOPIC_OFFSET..topic_end].copy_from_slice(self.topic.as_bytes());

        output[topic_end..topic_end + LEN_PREFIX_SIZE]
            .copy_from_slice(&(self.content.len() as u32).to_le_bytes());
        output[topic_end + LEN_PREFIX_SIZE..].copy_from_slice(self.content.as_bytes());
        Ok(())
    }
}
