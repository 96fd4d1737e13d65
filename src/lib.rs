// ==============================
// src/lib.rs
// ==============================
#![forbid(unsafe_code)]

pub mod entrypoint;
pub mod error;
pub mod filter;
pub mod instruction;
pub mod processor;
pub mod state;
pub mod validation;

solana_program::declare_id!("H4FBVtcR7yKNWJWnwK6wwEtREYaF5Vi6w9R1uHZXRw7F");
