//! Custom de/serialization logic used to encode field elements, curve points, and
//! integers into the fixed-width big-endian layout read by the Solidity verifier

use alloc::{fmt, vec::Vec};
use alloy_primitives::U256;
use ark_ec::AffineRepr;
use ark_ff::{BigInt, BigInteger, MontConfig, PrimeField, Zero};

use crate::{
    constants::{NUM_BYTES_FELT, NUM_BYTES_U64, NUM_BYTES_WORD, NUM_U64S_FELT},
    types::{G1Affine, G1BaseField, G2Affine, G2BaseField, MontFp256},
};

/// An error that occurs during de/serialization
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SerdeError {
    /// A sequence of bytes is not the expected length
    InvalidLength,
    /// A big-endian integer is not the canonical encoding of a field element
    ScalarConversion,
    /// A word does not fit in a u64
    IntegerOverflow,
    /// The custom gate commitments and their constraint indexes differ in number
    CommitmentCountMismatch {
        /// The number of custom gate commitments
        num_commitments: usize,
        /// The number of constraint indexes
        num_indexes: usize,
    },
    /// The encoded verification key is not the size dictated by the layout
    UnexpectedSize {
        /// The size dictated by the layout
        expected: usize,
        /// The number of bytes written
        actual: usize,
    },
}

impl fmt::Display for SerdeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerdeError::InvalidLength => write!(f, "invalid length"),
            SerdeError::ScalarConversion => write!(f, "non-canonical field element"),
            SerdeError::IntegerOverflow => write!(f, "word does not fit in a u64"),
            SerdeError::CommitmentCountMismatch {
                num_commitments,
                num_indexes,
            } => write!(
                f,
                "len(qcp) = {} != len(commitment_constraint_indexes) = {}",
                num_commitments, num_indexes
            ),
            SerdeError::UnexpectedSize { expected, actual } => {
                write!(f, "unexpected size: expected {} bytes, wrote {}", expected, actual)
            }
        }
    }
}

impl core::error::Error for SerdeError {}

// -------------------------------
// | BYTE SERDE TRAIT DEFINITION |
// -------------------------------

/// A trait for serializing types into byte arrays
pub trait BytesSerializable {
    /// Appends the serialization of a type to the given buffer
    fn serialize_into(&self, bytes: &mut Vec<u8>);

    /// Serializes a type into a vector of bytes
    fn serialize_to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        self.serialize_into(&mut bytes);
        bytes
    }
}

/// A trait for deserializing types from byte arrays
pub trait BytesDeserializable {
    /// The number of bytes expected to be deserialized
    const SER_LEN: usize;

    /// Deserializes a type from a slice of exactly `SER_LEN` bytes
    fn deserialize_from_bytes(bytes: &[u8]) -> Result<Self, SerdeError>
    where
        Self: Sized;
}

// -------------------------
// | TRAIT IMPLEMENTATIONS |
// -------------------------

impl BytesSerializable for u64 {
    /// Serializes a u64 into a full big-endian EVM word,
    /// i.e. 24 zero bytes followed by the 8 bytes of the integer
    fn serialize_into(&self, bytes: &mut Vec<u8>) {
        bytes.extend_from_slice(&U256::from(*self).to_be_bytes::<NUM_BYTES_WORD>());
    }
}

impl BytesDeserializable for u64 {
    const SER_LEN: usize = NUM_BYTES_WORD;

    fn deserialize_from_bytes(bytes: &[u8]) -> Result<Self, SerdeError> {
        if bytes.len() != Self::SER_LEN {
            return Err(SerdeError::InvalidLength);
        }

        let word = U256::from_be_slice(bytes);
        u64::try_from(word).map_err(|_| SerdeError::IntegerOverflow)
    }
}

impl<P: MontConfig<NUM_U64S_FELT>> BytesSerializable for MontFp256<P> {
    /// Serializes a field element into a big-endian byte array
    /// of its canonical (non-Montgomery) representation
    fn serialize_into(&self, bytes: &mut Vec<u8>) {
        bytes.extend(self.into_bigint().to_bytes_be());
    }
}

impl<P: MontConfig<NUM_U64S_FELT>> BytesDeserializable for MontFp256<P> {
    const SER_LEN: usize = NUM_BYTES_FELT;

    fn deserialize_from_bytes(bytes: &[u8]) -> Result<Self, SerdeError> {
        if bytes.len() != Self::SER_LEN {
            return Err(SerdeError::InvalidLength);
        }

        // Field elements are serialized as big-endian, so we need to reverse here
        // for `bigint_from_le_bytes`
        let mut bytes = bytes.to_vec();
        bytes.reverse();
        let bigint = bigint_from_le_bytes(&bytes)?;
        Self::from_bigint(bigint).ok_or(SerdeError::ScalarConversion)
    }
}

impl BytesSerializable for G1Affine {
    /// Serializes a G1 point into a big-endian byte array of its coordinates.
    /// The point at infinity is serialized as `(0, 0)`.
    ///
    /// This matches the format expected by the EVM `ecAdd`, `ecMul`, and `ecPairing`
    /// precompiles as specified here:
    /// https://eips.ethereum.org/EIPS/eip-197#encoding
    fn serialize_into(&self, bytes: &mut Vec<u8>) {
        let zero = G1BaseField::zero();
        let (x, y) = self.xy().unwrap_or((&zero, &zero));
        x.serialize_into(bytes);
        y.serialize_into(bytes);
    }
}

impl BytesDeserializable for G1Affine {
    const SER_LEN: usize = NUM_BYTES_FELT * 2;

    fn deserialize_from_bytes(bytes: &[u8]) -> Result<Self, SerdeError> {
        if bytes.len() != Self::SER_LEN {
            return Err(SerdeError::InvalidLength);
        }

        let mut cursor = 0;
        let x = deserialize_cursor(bytes, &mut cursor)?;
        let y = deserialize_cursor(bytes, &mut cursor)?;

        Ok(G1Affine {
            x,
            y,
            infinity: x.is_zero() && y.is_zero(),
        })
    }
}

impl BytesSerializable for G2Affine {
    /// Serializes a G2 point into a big-endian byte array of the coefficients
    /// of its coordinates in the extension field, i.e.:
    ///
    /// Given an element of the field extension F_p^2[u] represented as a1 * u + a0, where a1 and a0
    /// are elements of F_p, its serialization is the concatenation of a1 and then a0 in big-endian order.
    ///
    /// The imaginary coefficient comes first. This matches the format expected by the EVM
    /// `ecPairing` precompile, as specified here:
    /// https://eips.ethereum.org/EIPS/eip-197#encoding
    fn serialize_into(&self, bytes: &mut Vec<u8>) {
        let zero = G2BaseField::zero();
        let (x, y) = self.xy().unwrap_or((&zero, &zero));
        x.c1.serialize_into(bytes);
        x.c0.serialize_into(bytes);
        y.c1.serialize_into(bytes);
        y.c0.serialize_into(bytes);
    }
}

impl BytesDeserializable for G2Affine {
    const SER_LEN: usize = NUM_BYTES_FELT * 4;

    fn deserialize_from_bytes(bytes: &[u8]) -> Result<Self, SerdeError> {
        if bytes.len() != Self::SER_LEN {
            return Err(SerdeError::InvalidLength);
        }

        let mut cursor = 0;
        let x_c1 = deserialize_cursor(bytes, &mut cursor)?;
        let x_c0 = deserialize_cursor(bytes, &mut cursor)?;
        let y_c1 = deserialize_cursor(bytes, &mut cursor)?;
        let y_c0 = deserialize_cursor(bytes, &mut cursor)?;

        let x = G2BaseField { c0: x_c0, c1: x_c1 };
        let y = G2BaseField { c0: y_c0, c1: y_c1 };

        Ok(G2Affine {
            x,
            y,
            infinity: x.is_zero() && y.is_zero(),
        })
    }
}

impl<T: BytesSerializable> BytesSerializable for [T] {
    /// Serializes each element in order, with no length prefix
    fn serialize_into(&self, bytes: &mut Vec<u8>) {
        for elem in self {
            elem.serialize_into(bytes);
        }
    }
}

// -----------
// | HELPERS |
// -----------

/// Deserializes a type from a slice of bytes starting at the cursor position,
/// and increments the cursor by the number of bytes deserialized.
pub fn deserialize_cursor<D: BytesDeserializable>(
    bytes: &[u8],
    cursor: &mut usize,
) -> Result<D, SerdeError> {
    let end = cursor.checked_add(D::SER_LEN).ok_or(SerdeError::InvalidLength)?;
    let elem_bytes = bytes.get(*cursor..end).ok_or(SerdeError::InvalidLength)?;
    let elem = D::deserialize_from_bytes(elem_bytes)?;
    *cursor = end;
    Ok(elem)
}

/// Converts a little-endian byte array into a [`BigInt`]
pub fn bigint_from_le_bytes(bytes: &[u8]) -> Result<BigInt<NUM_U64S_FELT>, SerdeError> {
    if bytes.len() > NUM_BYTES_FELT {
        return Err(SerdeError::InvalidLength);
    }

    // This will right-pad the bytes with zero-bytes if the length is less than NUM_BYTES_FELT
    let mut bytes_to_convert = [0_u8; NUM_BYTES_FELT];
    bytes_to_convert[..bytes.len()].copy_from_slice(bytes);

    let mut u64s = [0u64; NUM_U64S_FELT];
    for (limb, chunk) in u64s
        .iter_mut()
        .zip(bytes_to_convert.chunks_exact(NUM_BYTES_U64))
    {
        let mut limb_bytes = [0_u8; NUM_BYTES_U64];
        limb_bytes.copy_from_slice(chunk);
        *limb = u64::from_le_bytes(limb_bytes);
    }
    Ok(BigInt::<NUM_U64S_FELT>(u64s))
}
