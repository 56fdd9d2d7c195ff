//! Constants that parameterize the Solidity verification key layout

/// The number of bytes to represent field elements of the base or scalar fields for the G1 curve group,
/// as well as the base field which is extended for the G2 curve group
pub const NUM_BYTES_FELT: usize = 32;

/// The number of u64s it takes to represent a field element
pub const NUM_U64S_FELT: usize = 4;

/// The number of bytes it takes to represent a u64
pub const NUM_BYTES_U64: usize = 8;

/// The number of bytes in an EVM word. Every integer slot in the
/// verification key occupies a full word.
pub const NUM_BYTES_WORD: usize = 32;

/// The number of bytes it takes to encode a G1 point
pub const NUM_BYTES_G1: usize = NUM_BYTES_FELT * 2;

/// The number of bytes it takes to encode a G2 point
pub const NUM_BYTES_G2: usize = NUM_BYTES_FELT * 4;

/// The number of permutation polynomial commitments in the verification key
pub const NUM_PERMUTATION_COMMS: usize = 3;

/// The number of G2 points in the KZG opening key
pub const NUM_KZG_G2_POINTS: usize = 2;

/// The size of the fixed portion of an encoded verification key:
/// two G2 points, one G1 point, four words / scalars,
/// eight G1 commitments, the coset shift, and the custom gate count
pub const VKEY_FIXED_SIZE: usize = NUM_BYTES_G2 * NUM_KZG_G2_POINTS
    + NUM_BYTES_G1
    + NUM_BYTES_WORD * 2
    + NUM_BYTES_FELT * 2
    + NUM_BYTES_G1 * 5
    + NUM_BYTES_G1 * NUM_PERMUTATION_COMMS
    + NUM_BYTES_FELT
    + NUM_BYTES_WORD;

/// The number of bytes each custom gate adds to an encoded verification key:
/// its commitment and the index of its constraint
pub const VKEY_BYTES_PER_CUSTOM_GATE: usize = NUM_BYTES_G1 + NUM_BYTES_WORD;

/// The offset at which the custom gate count word begins
pub const CUSTOM_GATE_COUNT_OFFSET: usize = VKEY_FIXED_SIZE - NUM_BYTES_WORD;

/// Returns the exact length of an encoded verification key with
/// `num_custom_gates` custom gate commitments
pub const fn expected_vkey_size(num_custom_gates: usize) -> usize {
    VKEY_FIXED_SIZE + VKEY_BYTES_PER_CUSTOM_GATE * num_custom_gates
}
