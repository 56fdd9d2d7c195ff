//! Encoding of a [`VerificationKey`] into the flat byte layout read by the
//! Solidity verifier, along with a companion decoder.
//!
//! The layout is positional, with no magic bytes or version tag:
//!
//! | field                                   | bytes |
//! |-----------------------------------------|-------|
//! | KZG G2 points                           | 2·128 |
//! | KZG G1 generator                        | 64    |
//! | number of public inputs                 | 32    |
//! | domain size                             | 32    |
//! | inverse of the domain size              | 32    |
//! | domain generator                        | 32    |
//! | `ql`, `qr`, `qm`, `qo`, `qk`            | 5·64  |
//! | `s`                                     | 3·64  |
//! | coset shift                             | 32    |
//! | number of custom gates `n`              | 32    |
//! | `qcp`                                   | n·64  |
//! | commitment constraint indexes           | n·32  |

use alloc::vec::Vec;

use crate::{
    constants::{
        expected_vkey_size, NUM_BYTES_FELT, NUM_BYTES_G1, NUM_BYTES_G2, NUM_BYTES_WORD,
        NUM_KZG_G2_POINTS, NUM_PERMUTATION_COMMS, VKEY_BYTES_PER_CUSTOM_GATE,
    },
    custom_serde::{deserialize_cursor, BytesSerializable, SerdeError},
    types::{G1Affine, G2Affine, KzgOpeningKey, ScalarField, VerificationKey},
};

/// A single field of an encoded verification key
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VkeyField {
    /// The name of the field
    pub name: &'static str,
    /// The offset of the field's first byte
    pub offset: usize,
    /// The number of bytes the field occupies
    pub len: usize,
}

/// Returns the fields of an encoded verification key with `num_custom_gates`
/// custom gates, in the order they are written
pub fn vkey_layout(num_custom_gates: usize) -> Vec<VkeyField> {
    let widths = [
        ("kzg.g2[0]", NUM_BYTES_G2),
        ("kzg.g2[1]", NUM_BYTES_G2),
        ("kzg.g1", NUM_BYTES_G1),
        ("num_public_inputs", NUM_BYTES_WORD),
        ("size", NUM_BYTES_WORD),
        ("size_inv", NUM_BYTES_FELT),
        ("generator", NUM_BYTES_FELT),
        ("ql", NUM_BYTES_G1),
        ("qr", NUM_BYTES_G1),
        ("qm", NUM_BYTES_G1),
        ("qo", NUM_BYTES_G1),
        ("qk", NUM_BYTES_G1),
        ("s[0]", NUM_BYTES_G1),
        ("s[1]", NUM_BYTES_G1),
        ("s[2]", NUM_BYTES_G1),
        ("coset_shift", NUM_BYTES_FELT),
        ("num_custom_gates", NUM_BYTES_WORD),
        ("qcp", NUM_BYTES_G1 * num_custom_gates),
        ("commitment_constraint_indexes", NUM_BYTES_WORD * num_custom_gates),
    ];

    let mut offset = 0;
    widths
        .into_iter()
        .map(|(name, len)| {
            let field = VkeyField { name, offset, len };
            offset += len;
            field
        })
        .collect()
}

/// Serializes a verification key into the byte layout expected by the Solidity verifier.
///
/// Fails without writing anything if the custom gate commitments and their constraint
/// indexes differ in number.
pub fn serialize_vkey_to_bytes(vkey: &VerificationKey) -> Result<Vec<u8>, SerdeError> {
    let num_custom_gates = vkey.num_custom_gates();
    if vkey.qcp.len() != num_custom_gates {
        return Err(SerdeError::CommitmentCountMismatch {
            num_commitments: vkey.qcp.len(),
            num_indexes: num_custom_gates,
        });
    }

    let expected = expected_vkey_size(num_custom_gates);
    let mut bytes = Vec::with_capacity(expected);

    vkey.kzg.g2.serialize_into(&mut bytes);
    vkey.kzg.g1.serialize_into(&mut bytes);
    vkey.num_public_inputs.serialize_into(&mut bytes);
    vkey.size.serialize_into(&mut bytes);
    vkey.size_inv.serialize_into(&mut bytes);
    vkey.generator.serialize_into(&mut bytes);
    vkey.ql.serialize_into(&mut bytes);
    vkey.qr.serialize_into(&mut bytes);
    vkey.qm.serialize_into(&mut bytes);
    vkey.qo.serialize_into(&mut bytes);
    vkey.qk.serialize_into(&mut bytes);
    vkey.s.serialize_into(&mut bytes);
    vkey.coset_shift.serialize_into(&mut bytes);
    (num_custom_gates as u64).serialize_into(&mut bytes);
    vkey.qcp.serialize_into(&mut bytes);
    vkey.commitment_constraint_indexes.serialize_into(&mut bytes);

    debug_assert_eq!(bytes.len(), expected, "verification key layout is inconsistent");
    if bytes.len() != expected {
        return Err(SerdeError::UnexpectedSize {
            expected,
            actual: bytes.len(),
        });
    }

    Ok(bytes)
}

/// Deserializes a verification key from the byte layout expected by the Solidity verifier.
///
/// The input must be exactly the length implied by its custom gate count.
///
/// Field elements must be canonical, but points are not checked for curve or
/// subgroup membership: the decoded key is whatever the bytes say.
pub fn deserialize_vkey_from_bytes(bytes: &[u8]) -> Result<VerificationKey, SerdeError> {
    let mut cursor = 0;

    let kzg_g2: [G2Affine; NUM_KZG_G2_POINTS] = [
        deserialize_cursor(bytes, &mut cursor)?,
        deserialize_cursor(bytes, &mut cursor)?,
    ];
    let kzg_g1: G1Affine = deserialize_cursor(bytes, &mut cursor)?;
    let num_public_inputs: u64 = deserialize_cursor(bytes, &mut cursor)?;
    let size: u64 = deserialize_cursor(bytes, &mut cursor)?;
    let size_inv: ScalarField = deserialize_cursor(bytes, &mut cursor)?;
    let generator: ScalarField = deserialize_cursor(bytes, &mut cursor)?;
    let ql: G1Affine = deserialize_cursor(bytes, &mut cursor)?;
    let qr: G1Affine = deserialize_cursor(bytes, &mut cursor)?;
    let qm: G1Affine = deserialize_cursor(bytes, &mut cursor)?;
    let qo: G1Affine = deserialize_cursor(bytes, &mut cursor)?;
    let qk: G1Affine = deserialize_cursor(bytes, &mut cursor)?;
    let s: [G1Affine; NUM_PERMUTATION_COMMS] = [
        deserialize_cursor(bytes, &mut cursor)?,
        deserialize_cursor(bytes, &mut cursor)?,
        deserialize_cursor(bytes, &mut cursor)?,
    ];
    let coset_shift: ScalarField = deserialize_cursor(bytes, &mut cursor)?;

    let num_custom_gates: u64 = deserialize_cursor(bytes, &mut cursor)?;
    let num_custom_gates =
        usize::try_from(num_custom_gates).map_err(|_| SerdeError::IntegerOverflow)?;

    // Check the length up front so that a corrupted count cannot drive a large allocation
    let remaining = bytes.len() - cursor;
    if num_custom_gates
        .checked_mul(VKEY_BYTES_PER_CUSTOM_GATE)
        .map_or(true, |len| len != remaining)
    {
        return Err(SerdeError::InvalidLength);
    }

    let qcp = (0..num_custom_gates)
        .map(|_| deserialize_cursor::<G1Affine>(bytes, &mut cursor))
        .collect::<Result<Vec<_>, _>>()?;
    let commitment_constraint_indexes = (0..num_custom_gates)
        .map(|_| deserialize_cursor::<u64>(bytes, &mut cursor))
        .collect::<Result<Vec<_>, _>>()?;

    debug_assert_eq!(cursor, bytes.len());

    Ok(VerificationKey {
        size,
        size_inv,
        generator,
        num_public_inputs,
        kzg: KzgOpeningKey {
            g1: kzg_g1,
            g2: kzg_g2,
        },
        coset_shift,
        s,
        ql,
        qr,
        qm,
        qo,
        qk,
        qcp,
        commitment_constraint_indexes,
    })
}
