// ==============================
// src/processor.rs (dispatch + canonical account order)
// ==============================
#![forbid(unsafe_code)]

use borsh::BorshDeserialize;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    clock::Clock,
    entrypoint::ProgramResult,
    msg,
    program::invoke,
    pubkey::Pubkey,
    rent::Rent,
    system_instruction, system_program,
    sysvar::Sysvar,
};

use crate::{
    error::RecordStoreError,
    instruction::RecordInstruction,
    state::Record,
    validation,
};

pub struct Processor;

impl Processor {
    pub fn process(program_id: &Pubkey, accounts: &[AccountInfo], ix_data: &[u8]) -> ProgramResult {
        let ix = RecordInstruction::try_from_slice(ix_data)
            .map_err(|_| RecordStoreError::InvalidInstruction)?;
        match ix {
            RecordInstruction::CreateRecord { topic, content } => {
                Self::create_record(program_id, accounts, topic, content)
            }
            RecordInstruction::UpdateRecord { topic, content } => {
                Self::update_record(program_id, accounts, topic, content)
            }
        }
    }

    // ---------------------------------------------------------------------
    // create_record(topic, content)
    // Accounts:
    // 0 [writable, signer] record   (fresh keypair, becomes the storage cell)
    // 1 [writable, signer] payer    (funds the allocation)
    // 2 [signer]           author   (stored in the record, may equal payer)
    // 3 []                 system_program
    // ---------------------------------------------------------------------
    fn create_record(
        program_id: &Pubkey,
        accounts: &[AccountInfo],
        topic: String,
        content: String,
    ) -> ProgramResult {
        let acc_iter = &mut accounts.iter();
        let record_ai = next_account_info(acc_iter)?;
        let payer_ai = next_account_info(acc_iter)?;
        let author_ai = next_account_info(acc_iter)?;
        let system_program_ai = next_account_info(acc_iter)?;

        if system_program_ai.key != &system_program::ID {
            return Err(RecordStoreError::InvalidInstruction.into());
        }

        // Fail closed: every precondition is checked before the cell exists.
        validation::validate_topic(&topic)?;
        validation::validate_content(&content)?;

        // The stored author must be a transaction signer; the payer's own
        // signature is enforced by the system program during the CPI.
        if !author_ai.is_signer {
            return Err(RecordStoreError::Unauthorized.into());
        }

        // The storage address must be unused.
        if !record_ai.data_is_empty() || record_ai.owner != &system_program::ID {
            return Err(RecordStoreError::CellAlreadyExists.into());
        }

        let record = Record {
            author: *author_ai.key,
            timestamp: Clock::get()?.unix_timestamp,
            topic,
            content,
        };

        // Allocate the cell sized exactly to the encoded record. The record
        // keypair co-signs the transaction, which the system program requires
        // for account creation at a non-derived address.
        let space = record.encoded_len();
        let lamports = Rent::get()?.minimum_balance(space);
        invoke(
            &system_instruction::create_account(
                payer_ai.key,
                record_ai.key,
                lamports,
                space as u64,
                program_id,
            ),
            &[payer_ai.clone(), record_ai.clone()],
        )?;

        record.pack(&mut record_ai.try_borrow_mut_data()?)?;

        msg!("record created at {}", record_ai.key);
        Ok(())
    }

    // ---------------------------------------------------------------------
    // update_record(topic, content)
    // Accounts:
    // 0 [writable]         record
    // 1 [writable, signer] author  (must equal the stored author; funds the
    //                               rent top-up when the cell grows)
    // 2 []                 system_program
    // ---------------------------------------------------------------------
    fn update_record(
        program_id: &Pubkey,
        accounts: &[AccountInfo],
        topic: String,
        content: String,
    ) -> ProgramResult {
        let acc_iter = &mut accounts.iter();
        let record_ai = next_account_info(acc_iter)?;
        let author_ai = next_account_info(acc_iter)?;
        let system_program_ai = next_account_info(acc_iter)?;

        if system_program_ai.key != &system_program::ID {
            return Err(RecordStoreError::InvalidInstruction.into());
        }

        if record_ai.owner != program_id || record_ai.data_is_empty() {
            return Err(RecordStoreError::CellNotFound.into());
        }
        let stored = Record::unpack(&record_ai.try_borrow_data()?)?;

        validation::validate_topic(&topic)?;
        validation::validate_content(&content)?;

        if !author_ai.is_signer || author_ai.key != &stored.author {
            return Err(RecordStoreError::Unauthorized.into());
        }

        // Author and timestamp carry over untouched.
        let updated = Record {
            author: stored.author,
            timestamp: stored.timestamp,
            topic,
            content,
        };

        // The cell is resized to the exact new encoding. Growth must keep the
        // cell rent-exempt, so missing lamports are transferred from the
        // author before the realloc.
        let new_space = updated.encoded_len();
        let old_space = record_ai.data_len();
        if new_space > old_space {
            let required = Rent::get()?.minimum_balance(new_space);
            let current = record_ai.lamports();
            if required > current {
                invoke(
                    &system_instruction::transfer(
                        author_ai.key,
                        record_ai.key,
                        required - current,
                    ),
                    &[author_ai.clone(), record_ai.clone()],
                )?;
            }
        }
        if new_space != old_space {
            record_ai.realloc(new_space, false)?;
        }

        updated.pack(&mut record_ai.try_borrow_mut_data()?)?;

        msg!("record updated at {}", record_ai.key);
        Ok(())
    }
}
