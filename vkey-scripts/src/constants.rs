//! Constants used in the verification key scripts

/// The prefix of hex-encoded byte strings
pub const HEX_PREFIX: &str = "0x";

/// The default log2 of the domain size of generated test verification keys
pub const DEFAULT_LOG_DOMAIN_SIZE: u32 = 16;

/// The two-adicity of the Bn254 scalar field, bounding the domain size of generated keys
pub const MAX_LOG_DOMAIN_SIZE: u32 = 28;

/// The environment variable from which the verification key path can be read
pub const VKEY_PATH_ENV_VAR: &str = "VKEY_PATH";

/// The environment variable from which the encoded bytes path can be read
pub const VKEY_BYTES_PATH_ENV_VAR: &str = "VKEY_BYTES_PATH";
