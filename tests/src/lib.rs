//! Shared utilities for the integration tests

pub mod vkey_serde;
