// ==============================
// src/error.rs
// ==============================
#![forbid(unsafe_code)]

use solana_program::program_error::ProgramError;
use thiserror::Error;

/// Every failure is surfaced as `ProgramError::Custom(code)` with the codes
/// below. The two validation messages are part of the client-facing contract
/// and must not be reworded.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[repr(u32)]
pub enum RecordStoreError {
    // 0–9: Instruction
    #[error("Invalid instruction")]
    InvalidInstruction = 0,

    // 10–19: Validation
    #[error("The provided topic should be 50 characters long maximum.")]
    TopicTooLong = 10,
    #[error("The provided content should be 280 characters long maximum.")]
    ContentTooLong = 11,

    // 20–29: Authorization
    #[error("Only the record author can modify it")]
    Unauthorized = 20,

    // 30–39: Storage cells
    #[error("A record already exists at this address")]
    CellAlreadyExists = 30,
    #[error("No record exists at this address")]
    CellNotFound = 31,
    #[error("Stored bytes do not match the record layout")]
    CorruptRecord = 32,
}

impl From<RecordStoreError> for ProgramError {
    fn from(e: RecordStoreError) -> Self {
        ProgramError::Custom(e as u32)
    }
}
