//! Scripts for encoding and inspecting verification keys for the Solidity verifier.

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod cli;
mod commands;
pub mod constants;
pub mod errors;
pub mod utils;
