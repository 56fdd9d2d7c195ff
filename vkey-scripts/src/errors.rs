//! Definitions of errors that can occur during the execution of the verification key scripts

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Errors that can occur during the execution of the verification key scripts
#[derive(Debug)]
pub enum ScriptError {
    /// Error reading a verification key or encoded bytes from a file
    ReadFile(String),
    /// Error writing output to a file
    WriteFile(String),
    /// Error de/serializing a verification key file
    Serde(String),
    /// Error encoding or decoding the Solidity verification key layout
    Encoding(String),
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::ReadFile(s) => write!(f, "error reading file: {}", s),
            ScriptError::WriteFile(s) => write!(f, "error writing file: {}", s),
            ScriptError::Serde(s) => write!(f, "error de/serializing verification key: {}", s),
            ScriptError::Encoding(s) => write!(f, "error encoding verification key: {}", s),
        }
    }
}

impl Error for ScriptError {}
