//! Utilities for the verification key scripts.

use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Write},
};

use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use tracing::warn;
use vkey_common::types::VerificationKey;

use crate::{cli::VkeyFormat, constants::HEX_PREFIX, errors::ScriptError};

/// Reads a verification key from a file in the given format
pub fn read_vkey(file_path: &str, format: VkeyFormat) -> Result<VerificationKey, ScriptError> {
    let file = File::open(file_path).map_err(|e| ScriptError::ReadFile(e.to_string()))?;
    let reader = BufReader::new(file);

    match format {
        VkeyFormat::Json => {
            serde_json::from_reader(reader).map_err(|e| ScriptError::Serde(e.to_string()))
        }
        VkeyFormat::Ark => VerificationKey::deserialize_compressed(reader)
            .map_err(|e| ScriptError::Serde(e.to_string())),
    }
}

/// Writes a verification key to a file in the given format
pub fn write_vkey(
    file_path: &str,
    vkey: &VerificationKey,
    format: VkeyFormat,
) -> Result<(), ScriptError> {
    let file = File::create(file_path).map_err(|e| ScriptError::WriteFile(e.to_string()))?;
    let mut writer = BufWriter::new(file);

    match format {
        VkeyFormat::Json => serde_json::to_writer_pretty(&mut writer, vkey)
            .map_err(|e| ScriptError::Serde(e.to_string()))?,
        VkeyFormat::Ark => vkey
            .serialize_compressed(&mut writer)
            .map_err(|e| ScriptError::Serde(e.to_string()))?,
    }

    writer
        .flush()
        .map_err(|e| ScriptError::WriteFile(e.to_string()))
}

/// Reads encoded bytes from a file, either raw or as a (optionally `0x`-prefixed) hex string
pub fn read_bytes(file_path: &str, raw: bool) -> Result<Vec<u8>, ScriptError> {
    if raw {
        return fs::read(file_path).map_err(|e| ScriptError::ReadFile(e.to_string()));
    }

    let contents =
        fs::read_to_string(file_path).map_err(|e| ScriptError::ReadFile(e.to_string()))?;
    decode_hex(&contents)
}

/// Decodes a hex string, ignoring surrounding whitespace and an optional `0x` prefix
pub fn decode_hex(hex_str: &str) -> Result<Vec<u8>, ScriptError> {
    let trimmed = hex_str.trim();
    let trimmed = trimmed.strip_prefix(HEX_PREFIX).unwrap_or(trimmed);
    hex::decode(trimmed).map_err(|e| ScriptError::Serde(e.to_string()))
}

/// Encodes bytes as a `0x`-prefixed hex string
pub fn encode_hex(bytes: &[u8]) -> String {
    format!("{}{}", HEX_PREFIX, hex::encode(bytes))
}

/// Writes the given contents to a file, or to stdout if no path is given
pub fn write_output(out: Option<&str>, contents: &[u8]) -> Result<(), ScriptError> {
    match out {
        Some(path) => fs::write(path, contents).map_err(|e| ScriptError::WriteFile(e.to_string())),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(contents)
                .and_then(|_| stdout.write_all(b"\n"))
                .map_err(|e| ScriptError::WriteFile(e.to_string()))
        }
    }
}

/// Returns a description of each property of the key that a well-formed
/// Plonk verification key would not have. None of these prevent encoding.
pub fn vkey_warnings(vkey: &VerificationKey) -> Vec<String> {
    let mut warnings = Vec::new();

    if !vkey.size.is_power_of_two() {
        warnings.push(format!("domain size {} is not a power of two", vkey.size));
    }

    if vkey.num_public_inputs == 0 {
        warnings.push("verification key has no public inputs".to_string());
    } else if vkey.num_public_inputs > vkey.size {
        warnings.push(format!(
            "{} public inputs exceed the domain size {}",
            vkey.num_public_inputs, vkey.size
        ));
    }

    if let Some(index) = vkey
        .commitment_constraint_indexes
        .iter()
        .find(|index| **index >= vkey.size)
    {
        warnings.push(format!(
            "commitment constraint index {} is outside the domain of size {}",
            index, vkey.size
        ));
    }

    let g1_points = [
        ("kzg.g1", &vkey.kzg.g1),
        ("ql", &vkey.ql),
        ("qr", &vkey.qr),
        ("qm", &vkey.qm),
        ("qo", &vkey.qo),
        ("qk", &vkey.qk),
        ("s[0]", &vkey.s[0]),
        ("s[1]", &vkey.s[1]),
        ("s[2]", &vkey.s[2]),
    ];
    let qcp_names: Vec<String> = (0..vkey.qcp.len()).map(|i| format!("qcp[{i}]")).collect();
    let g1_points = g1_points
        .into_iter()
        .chain(qcp_names.iter().map(String::as_str).zip(vkey.qcp.iter()));
    for (name, point) in g1_points {
        if !point.is_on_curve() {
            warnings.push(format!("{name} is not on the G1 curve"));
        }
    }

    for (i, point) in vkey.kzg.g2.iter().enumerate() {
        if !point.is_on_curve() {
            warnings.push(format!("kzg.g2[{i}] is not on the G2 curve"));
        } else if !point.infinity && !point.is_in_correct_subgroup_assuming_on_curve() {
            warnings.push(format!("kzg.g2[{i}] is not in the G2 subgroup"));
        }
    }

    warnings
}

/// Logs a warning for each suspicious property of the key
pub fn warn_on_suspicious_vkey(vkey: &VerificationKey) {
    for warning in vkey_warnings(vkey) {
        warn!("{}", warning);
    }
}
