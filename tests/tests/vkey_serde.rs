use std::thread;

use ark_ff::PrimeField;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use eyre::{eyre, Result};
use num_bigint::BigUint;
use rand::{thread_rng, Rng};
use test_helpers::vkey::{random_vkey, zero_vkey};
use tests::{
    utils::{setup_tracing, MAX_TEST_CUSTOM_GATES, TEST_LOG_DOMAIN_SIZE},
    vkey_serde::utils::{
        assert_custom_gates, assert_header, assert_kzg_g1, decode_g2_imaginary_first, kzg_ranges,
    },
};
use vkey_common::{
    constants::{
        expected_vkey_size, CUSTOM_GATE_COUNT_OFFSET, NUM_BYTES_FELT, NUM_BYTES_G1, NUM_BYTES_G2,
        VKEY_FIXED_SIZE,
    },
    custom_serde::{BytesSerializable, SerdeError},
    types::VerificationKey,
    vkey::{deserialize_vkey_from_bytes, serialize_vkey_to_bytes},
};

#[test]
fn test_encoded_length() -> Result<()> {
    setup_tracing();
    let mut rng = thread_rng();

    for n in 0..=MAX_TEST_CUSTOM_GATES {
        let vkey = random_vkey(TEST_LOG_DOMAIN_SIZE, n, &mut rng);
        let bytes = serialize_vkey_to_bytes(&vkey)?;
        assert_eq!(bytes.len(), expected_vkey_size(n));
        assert_eq!(bytes.len(), 1024 + 96 * n);
    }

    Ok(())
}

#[test]
fn test_no_custom_gates_ends_with_zero_count() -> Result<()> {
    let bytes = serialize_vkey_to_bytes(&zero_vkey(4, 1, vec![]))?;

    assert_eq!(bytes.len(), VKEY_FIXED_SIZE);
    assert_eq!(bytes[CUSTOM_GATE_COUNT_OFFSET..], 0u64.serialize_to_bytes());

    Ok(())
}

#[test]
fn test_zero_vkey_two_custom_gates() -> Result<()> {
    let bytes = serialize_vkey_to_bytes(&zero_vkey(4, 1, vec![3, 7]))?;

    assert_eq!(bytes.len(), 1216);
    assert_eq!(bytes[992..1024], 2u64.serialize_to_bytes());
    assert_eq!(bytes[1024..1088], [0u8; 64]);
    assert_eq!(bytes[1088..1152], [0u8; 64]);

    let mut expected_tail = 3u64.serialize_to_bytes();
    expected_tail.extend(7u64.serialize_to_bytes());
    assert_eq!(bytes[1152..], expected_tail);

    Ok(())
}

#[test]
fn test_mismatched_custom_gates() {
    let mut rng = thread_rng();
    let mut vkey = random_vkey(TEST_LOG_DOMAIN_SIZE, 3, &mut rng);
    vkey.commitment_constraint_indexes.push(rng.gen());

    assert_eq!(
        serialize_vkey_to_bytes(&vkey),
        Err(SerdeError::CommitmentCountMismatch {
            num_commitments: 3,
            num_indexes: 4,
        })
    );

    vkey.commitment_constraint_indexes.truncate(1);
    assert!(matches!(
        serialize_vkey_to_bytes(&vkey),
        Err(SerdeError::CommitmentCountMismatch { .. })
    ));
}

#[test]
fn test_field_layout() -> Result<()> {
    setup_tracing();
    let mut rng = thread_rng();
    let vkey = random_vkey(TEST_LOG_DOMAIN_SIZE, 4, &mut rng);
    let bytes = serialize_vkey_to_bytes(&vkey)?;

    assert_kzg_g1(&vkey, &bytes)?;
    assert_header(&vkey, &bytes)?;
    assert_custom_gates(&vkey, &bytes)
}

#[test]
fn test_kzg_g2_imaginary_coefficient_first() -> Result<()> {
    let mut rng = thread_rng();
    let vkey = random_vkey(TEST_LOG_DOMAIN_SIZE, 0, &mut rng);
    let bytes = serialize_vkey_to_bytes(&vkey)?;

    let [g2_0, g2_1, _] = kzg_ranges();
    assert_eq!(decode_g2_imaginary_first(&bytes[g2_0])?, vkey.kzg.g2[0]);
    assert_eq!(decode_g2_imaginary_first(&bytes[g2_1])?, vkey.kzg.g2[1]);

    Ok(())
}

#[test]
fn test_decode_roundtrip() -> Result<()> {
    let mut rng = thread_rng();
    for n in [0, 1, MAX_TEST_CUSTOM_GATES] {
        let vkey = random_vkey(TEST_LOG_DOMAIN_SIZE, n, &mut rng);
        let bytes = serialize_vkey_to_bytes(&vkey)?;
        let decoded = deserialize_vkey_from_bytes(&bytes)?;
        assert_eq!(decoded, vkey);
    }

    Ok(())
}

#[test]
fn test_decode_rejects_inconsistent_count() -> Result<()> {
    let mut bytes = serialize_vkey_to_bytes(&zero_vkey(4, 1, vec![3, 7]))?;
    bytes[CUSTOM_GATE_COUNT_OFFSET..VKEY_FIXED_SIZE].copy_from_slice(&3u64.serialize_to_bytes());

    assert_eq!(
        deserialize_vkey_from_bytes(&bytes),
        Err(SerdeError::InvalidLength)
    );

    Ok(())
}

#[test]
fn test_decode_rejects_trailing_bytes() -> Result<()> {
    let mut bytes = serialize_vkey_to_bytes(&zero_vkey(4, 1, vec![1]))?;
    bytes.push(0);

    assert_eq!(
        deserialize_vkey_from_bytes(&bytes),
        Err(SerdeError::InvalidLength)
    );
    Ok(())
}

#[test]
fn test_decode_rejects_truncated_header() -> Result<()> {
    let bytes = serialize_vkey_to_bytes(&zero_vkey(4, 1, vec![1]))?;

    assert_eq!(
        deserialize_vkey_from_bytes(&bytes[..VKEY_FIXED_SIZE - 1]),
        Err(SerdeError::InvalidLength)
    );
    Ok(())
}

#[test]
fn test_decode_accepts_point_off_curve() -> Result<()> {
    // KZG G1 generator set to (1, 5), which is not on the curve
    let mut bytes = serialize_vkey_to_bytes(&zero_vkey(4, 1, vec![]))?;
    let g1_offset = 2 * NUM_BYTES_G2;
    bytes[g1_offset..g1_offset + NUM_BYTES_FELT].copy_from_slice(&1u64.serialize_to_bytes());
    bytes[g1_offset + NUM_BYTES_FELT..g1_offset + NUM_BYTES_G1]
        .copy_from_slice(&5u64.serialize_to_bytes());

    let vkey = deserialize_vkey_from_bytes(&bytes)?;
    assert!(!vkey.kzg.g1.is_on_curve());
    assert_eq!(serialize_vkey_to_bytes(&vkey)?, bytes);
    Ok(())
}

#[test]
fn test_encoding_is_deterministic_across_threads() -> Result<()> {
    let mut rng = thread_rng();
    let vkey = random_vkey(TEST_LOG_DOMAIN_SIZE, 2, &mut rng);
    let expected = serialize_vkey_to_bytes(&vkey)?;

    let encodings = thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| serialize_vkey_to_bytes(&vkey)))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().map_err(|_| eyre!("encoder thread panicked")))
            .collect::<Result<Vec<_>>>()
    })?;

    for encoding in encodings {
        assert_eq!(encoding?, expected);
    }

    Ok(())
}

#[test]
fn test_vkey_json_roundtrip() -> Result<()> {
    let mut rng = thread_rng();
    let vkey = random_vkey(TEST_LOG_DOMAIN_SIZE, 2, &mut rng);

    let json = serde_json::to_string(&vkey)?;
    let decoded: VerificationKey = serde_json::from_str(&json)?;

    assert_eq!(serialize_vkey_to_bytes(&decoded)?, serialize_vkey_to_bytes(&vkey)?);
    Ok(())
}

#[test]
fn test_vkey_json_felts_are_big_endian_hex() -> Result<()> {
    let mut rng = thread_rng();
    let vkey = random_vkey(TEST_LOG_DOMAIN_SIZE, 1, &mut rng);
    let json = serde_json::to_value(&vkey)?;

    let to_hex = |bigint: BigUint| format!("0x{:064x}", bigint);
    assert_eq!(json["size_inv"], to_hex(vkey.size_inv.into_bigint().into()));
    assert_eq!(json["ql"]["x"], to_hex(vkey.ql.x.into_bigint().into()));
    assert_eq!(
        json["kzg"]["g2"][1]["y"]["c1"],
        to_hex(vkey.kzg.g2[1].y.c1.into_bigint().into())
    );

    Ok(())
}

#[test]
fn test_vkey_json_rejects_non_canonical_felt() -> Result<()> {
    let mut rng = thread_rng();
    let vkey = random_vkey(TEST_LOG_DOMAIN_SIZE, 0, &mut rng);
    let mut json = serde_json::to_value(&vkey)?;

    // The scalar field modulus
    json["coset_shift"] =
        "0x30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001".into();
    assert!(serde_json::from_value::<VerificationKey>(json).is_err());

    Ok(())
}

#[test]
fn test_vkey_canonical_roundtrip() -> Result<()> {
    let mut rng = thread_rng();
    let vkey = random_vkey(TEST_LOG_DOMAIN_SIZE, 2, &mut rng);

    let mut buf = Vec::new();
    vkey.serialize_compressed(&mut buf)?;
    let decoded = VerificationKey::deserialize_compressed(buf.as_slice())?;

    assert_eq!(decoded, vkey);
    Ok(())
}
