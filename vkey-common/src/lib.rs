//! Common modules for encoding Plonk verification keys into the byte layout
//! expected by the Solidity verifier contract

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]
#![no_std]

extern crate alloc;

pub mod constants;
pub mod custom_serde;
pub mod serde_def_types;
pub mod types;
pub mod vkey;
