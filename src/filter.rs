// ==============================
// src/filter.rs (offset predicates over Record Layout v1)
// ==============================
#![forbid(unsafe_code)]

use solana_program::{program_error::ProgramError, pubkey::Pubkey};

use crate::state::{
    Record, AUTHOR_OFFSET, RECORD_DISCRIMINATOR, TOPIC_LEN_OFFSET, TOPIC_OFFSET,
};

/// An exact-byte match against a serialized record at a fixed offset. This is
/// the same shape the chain RPC exposes as a `memcmp` filter for program
/// account scans; a scan returns the cells matching *all* supplied filters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemcmpFilter {
    pub offset: usize,
    pub bytes: Vec<u8>,
}

impl MemcmpFilter {
    pub fn new(offset: usize, bytes: Vec<u8>) -> Self {
        Self { offset, bytes }
    }

    pub fn matches(&self, data: &[u8]) -> bool {
        let Some(end) = self.offset.checked_add(self.bytes.len()) else {
            return false;
        };
        data.len() >= end && data[self.offset..end] == self.bytes[..]
    }
}

/// Matches every record cell via the discriminator at offset 0.
pub fn record_filter() -> MemcmpFilter {
    MemcmpFilter::new(0, RECORD_DISCRIMINATOR.to_vec())
}

/// Matches records by their author at offset 8.
pub fn author_filter(author: &Pubkey) -> MemcmpFilter {
    MemcmpFilter::new(AUTHOR_OFFSET, author.as_ref().to_vec())
}

/// Matches records whose topic equals `topic` exactly. Two predicates are
/// needed: the bytes at offset 52 alone would also match any longer topic
/// sharing the prefix, so the u32 length at offset 48 is pinned as well.
pub fn topic_filter(topic: &str) -> Vec<MemcmpFilter> {
    vec![
        MemcmpFilter::new(TOPIC_LEN_OFFSET, (topic.len() as u32).to_le_bytes().to_vec()),
        MemcmpFilter::new(TOPIC_OFFSET, topic.as_bytes().to_vec()),
    ]
}

pub fn matches_all(data: &[u8], filters: &[MemcmpFilter]) -> bool {
    filters.iter().all(|f| f.matches(data))
}

/// Applies a filter set to `(address, data)` pairs and decodes the matches.
/// A matching cell that fails to decode is a layout mismatch and is surfaced
/// as `CorruptRecord` rather than skipped.
pub fn select_records<'a, I>(
    accounts: I,
    filters: &[MemcmpFilter],
) -> Result<Vec<(Pubkey, Record)>, ProgramError>
where
    I: IntoIterator<Item = (Pubkey, &'a [u8])>,
{
    let mut selected = Vec::new();
    for (address, data) in accounts {
        if matches_all(data, filters) {
            selected.push((address, Record::unpack(data)?));
        }
    }
    Ok(selected)
}
