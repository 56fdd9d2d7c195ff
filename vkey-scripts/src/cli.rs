//! Definitions of CLI arguments and commands for the verification key scripts

use std::fmt::{self, Display};

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::{
    commands::{encode_vkey, gen_test_vkey, inspect_vkey},
    constants::{
        DEFAULT_LOG_DOMAIN_SIZE, MAX_LOG_DOMAIN_SIZE, VKEY_BYTES_PATH_ENV_VAR, VKEY_PATH_ENV_VAR,
    },
    errors::ScriptError,
};

/// Encode Plonk verification keys into the byte layout read by the Solidity verifier
#[derive(Parser)]
pub struct Cli {
    /// The command to run
    #[command(subcommand)]
    pub command: Command,
}

/// The verification key scripts
#[derive(Subcommand)]
pub enum Command {
    /// Encode a verification key for the Solidity verifier
    Encode(EncodeArgs),
    /// Decode an encoded verification key and print it as JSON
    Inspect(InspectArgs),
    /// Generate a random verification key for testing
    GenTestVkey(GenTestVkeyArgs),
}

impl Command {
    /// Runs the command
    pub fn run(self) -> Result<(), ScriptError> {
        match self {
            Command::Encode(args) => encode_vkey(args),
            Command::Inspect(args) => inspect_vkey(args),
            Command::GenTestVkey(args) => gen_test_vkey(args),
        }
    }
}

/// The format of a verification key file
#[derive(ValueEnum, Copy, Clone, Debug, Default)]
pub enum VkeyFormat {
    /// JSON, as produced by `serde_json`
    #[default]
    Json,
    /// The compressed Arkworks canonical serialization
    Ark,
}

impl Display for VkeyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VkeyFormat::Json => write!(f, "json"),
            VkeyFormat::Ark => write!(f, "ark"),
        }
    }
}

/// Encode a verification key
#[derive(Args)]
pub struct EncodeArgs {
    /// Path to the verification key file
    #[arg(short, long, env = VKEY_PATH_ENV_VAR)]
    pub vkey_path: String,

    /// The format of the verification key file
    #[arg(short, long, value_enum, default_value_t = VkeyFormat::Json)]
    pub format: VkeyFormat,

    /// Path at which to write the encoded bytes, defaults to stdout
    #[arg(short, long)]
    pub out: Option<String>,

    /// Write the raw bytes rather than a hex string. Requires `--out`.
    #[arg(long, requires = "out")]
    pub raw: bool,
}

/// Inspect an encoded verification key
#[derive(Args)]
pub struct InspectArgs {
    /// Path to the encoded verification key
    #[arg(short, long, env = VKEY_BYTES_PATH_ENV_VAR)]
    pub bytes_path: String,

    /// Whether the file holds raw bytes rather than a hex string
    #[arg(long)]
    pub raw: bool,

    /// Path at which to write the decoded key as JSON, defaults to stdout
    #[arg(short, long)]
    pub out: Option<String>,
}

/// Generate a random verification key
#[derive(Args)]
pub struct GenTestVkeyArgs {
    /// The number of custom gates in the key
    #[arg(short, long, default_value_t = 0)]
    pub num_custom_gates: usize,

    /// The log2 of the domain size, at most the two-adicity of the scalar field
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_LOG_DOMAIN_SIZE,
        value_parser = clap::value_parser!(u32).range(1..=MAX_LOG_DOMAIN_SIZE as i64),
    )]
    pub log_domain_size: u32,

    /// The format in which to write the key
    #[arg(short, long, value_enum, default_value_t = VkeyFormat::Json)]
    pub format: VkeyFormat,

    /// Path at which to write the key
    #[arg(short, long)]
    pub out: String,
}
