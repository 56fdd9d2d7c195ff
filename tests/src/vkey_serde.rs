//! Helpers for testing the Solidity verification key encoding
