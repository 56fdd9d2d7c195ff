//! Implementations of the verification key scripts

use rand::thread_rng;
use test_helpers::vkey::random_vkey;
use tracing::{debug, info};
use vkey_common::{
    constants::{expected_vkey_size, VKEY_FIXED_SIZE},
    vkey::{deserialize_vkey_from_bytes, serialize_vkey_to_bytes, vkey_layout},
};

use crate::{
    cli::{EncodeArgs, GenTestVkeyArgs, InspectArgs},
    errors::ScriptError,
    utils::{encode_hex, read_bytes, read_vkey, warn_on_suspicious_vkey, write_output, write_vkey},
};

/// Encode a verification key file for the Solidity verifier
pub fn encode_vkey(args: EncodeArgs) -> Result<(), ScriptError> {
    let vkey = read_vkey(&args.vkey_path, args.format)?;
    info!(
        "Encoding verification key with domain size {}, {} public inputs, {} custom gates",
        vkey.size,
        vkey.num_public_inputs,
        vkey.num_custom_gates()
    );
    warn_on_suspicious_vkey(&vkey);

    let bytes =
        serialize_vkey_to_bytes(&vkey).map_err(|e| ScriptError::Encoding(e.to_string()))?;
    debug!(
        "Encoded {} bytes ({} fixed, {} for custom gates)",
        bytes.len(),
        VKEY_FIXED_SIZE,
        bytes.len() - VKEY_FIXED_SIZE
    );
    for field in vkey_layout(vkey.num_custom_gates()) {
        debug!("{:>30} at offset {:>5}, {} bytes", field.name, field.offset, field.len);
    }

    if args.raw {
        write_output(args.out.as_deref(), &bytes)
    } else {
        write_output(args.out.as_deref(), encode_hex(&bytes).as_bytes())
    }
}

/// Decode an encoded verification key and write it out as JSON
pub fn inspect_vkey(args: InspectArgs) -> Result<(), ScriptError> {
    let bytes = read_bytes(&args.bytes_path, args.raw)?;
    debug!("Read {} encoded bytes", bytes.len());

    let vkey =
        deserialize_vkey_from_bytes(&bytes).map_err(|e| ScriptError::Encoding(e.to_string()))?;
    debug_assert_eq!(bytes.len(), expected_vkey_size(vkey.num_custom_gates()));

    info!(
        "Decoded verification key with domain size {}, {} public inputs, custom gates at constraints {:?}",
        vkey.size, vkey.num_public_inputs, vkey.commitment_constraint_indexes
    );
    warn_on_suspicious_vkey(&vkey);

    let json =
        serde_json::to_string_pretty(&vkey).map_err(|e| ScriptError::Serde(e.to_string()))?;
    write_output(args.out.as_deref(), json.as_bytes())
}

/// Generate a random verification key for testing
pub fn gen_test_vkey(args: GenTestVkeyArgs) -> Result<(), ScriptError> {
    let mut rng = thread_rng();
    let vkey = random_vkey(args.log_domain_size, args.num_custom_gates, &mut rng);

    write_vkey(&args.out, &vkey, args.format)?;
    info!(
        "Wrote test verification key with {} custom gates to {} ({})",
        args.num_custom_gates, args.out, args.format
    );

    Ok(())
}
