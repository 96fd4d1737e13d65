// ==============================
// src/instruction.rs
// ==============================
#![forbid(unsafe_code)]

use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::{
    instruction::{AccountMeta, Instruction},
    program_error::ProgramError,
    pubkey::Pubkey,
    system_program,
};

use crate::error::RecordStoreError;

#[derive(Clone, Debug, BorshSerialize, BorshDeserialize)]
pub enum RecordInstruction {
    /// create_record(topic, content)
    /// Allocates a fresh storage cell sized exactly to the encoded record and
    /// writes author, clock timestamp, topic, and content.
    CreateRecord { topic: String, content: String },

    /// update_record(topic, content)
    /// Rewrites topic and content in place; author and timestamp are untouched.
    UpdateRecord { topic: String, content: String },
}

/// Builds a `CreateRecord` instruction.
///
/// Accounts:
/// 0 `[writable, signer]` record  — fresh keypair, the storage cell
/// 1 `[writable, signer]` payer   — funds the cell allocation
/// 2 `[signer]`           author  — stored as the record's immutable author
/// 3 `[]`                 system_program
///
/// Payer and author may be the same key; both must sign either way.
pub fn create_record(
    program_id: &Pubkey,
    record: &Pubkey,
    payer: &Pubkey,
    author: &Pubkey,
    topic: &str,
    content: &str,
) -> Result<Instruction, ProgramError> {
    let data = borsh::to_vec(&RecordInstruction::CreateRecord {
        topic: topic.to_string(),
        content: content.to_string(),
    })
    .map_err(|_| RecordStoreError::InvalidInstruction)?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*record, true),
            AccountMeta::new(*payer, true),
            AccountMeta::new_readonly(*author, true),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data,
    })
}

/// Builds an `UpdateRecord` instruction.
///
/// Accounts:
/// 0 `[writable]`         record
/// 1 `[writable, signer]` author — also funds the rent top-up when the cell grows
/// 2 `[]`                 system_program
pub fn update_record(
    program_id: &Pubkey,
    record: &Pubkey,
    author: &Pubkey,
    topic: &str,
    content: &str,
) -> Result<Instruction, ProgramError> {
    let data = borsh::to_vec(&RecordInstruction::UpdateRecord {
        topic: topic.to_string(),
        content: content.to_string(),
    })
    .map_err(|_| RecordStoreError::InvalidInstruction)?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*record, false),
            AccountMeta::new(*author, true),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data,
    })
}
