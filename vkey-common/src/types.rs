//! Common types used throughout the verification key encoder.

use alloc::vec::Vec;
use ark_bn254::{g1::Config as G1Config, g2::Config as G2Config, Fq, Fq2, Fr};
use ark_ec::short_weierstrass::Affine;
use ark_ff::{Fp256, MontBackend};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use crate::{
    constants::{NUM_KZG_G2_POINTS, NUM_PERMUTATION_COMMS, NUM_U64S_FELT},
    serde_def_types::*,
};

/// Type alias for an element of the scalar field of the Bn254 curve
pub type ScalarField = Fr;

/// Type alias for an element of the Bn254 curve's G1 pairing group
pub type G1Affine = Affine<G1Config>;

/// Type alias for an element of the Bn254 curve's G2 pairing group
pub type G2Affine = Affine<G2Config>;

/// Type alias for an element of the Bn254 curve's G1 pairing group's base field
pub type G1BaseField = Fq;

/// Type alias for an element of the Bn254 curve's G2 pairing group's base field
pub type G2BaseField = Fq2;

/// Type alias for a 256-bit prime field element in Montgomery form
pub type MontFp256<P> = Fp256<MontBackend<P, NUM_U64S_FELT>>;

/// The KZG opening key of the universal SRS
#[serde_as]
#[derive(
    Clone, Debug, PartialEq, Eq, Serialize, Deserialize, CanonicalSerialize, CanonicalDeserialize,
)]
pub struct KzgOpeningKey {
    /// The generator of the G1 group
    #[serde_as(as = "G1AffineDef")]
    pub g1: G1Affine,
    /// The generator of the G2 group, followed by its product with the
    /// secret evaluation point
    #[serde_as(as = "[G2AffineDef; NUM_KZG_G2_POINTS]")]
    pub g2: [G2Affine; NUM_KZG_G2_POINTS],
}

/// Preprocessed information derived from the circuit definition and universal SRS
/// used by the Solidity verifier.
#[serde_as]
#[derive(
    Clone, Debug, PartialEq, Eq, Serialize, Deserialize, CanonicalSerialize, CanonicalDeserialize,
)]
pub struct VerificationKey {
    /// The size of the evaluation domain, a power of two
    pub size: u64,
    /// The inverse of `size` in the scalar field
    #[serde_as(as = "FeltHex")]
    pub size_inv: ScalarField,
    /// The generator of the evaluation domain
    #[serde_as(as = "FeltHex")]
    pub generator: ScalarField,
    /// The number of public inputs to the circuit
    pub num_public_inputs: u64,
    /// The KZG opening key
    pub kzg: KzgOpeningKey,
    /// The shift used to generate the cosets of the permutation argument
    #[serde_as(as = "FeltHex")]
    pub coset_shift: ScalarField,
    /// The commitments to the permutation polynomials
    #[serde_as(as = "[G1AffineDef; NUM_PERMUTATION_COMMS]")]
    pub s: [G1Affine; NUM_PERMUTATION_COMMS],
    /// The commitment to the left selector polynomial
    #[serde_as(as = "G1AffineDef")]
    pub ql: G1Affine,
    /// The commitment to the right selector polynomial
    #[serde_as(as = "G1AffineDef")]
    pub qr: G1Affine,
    /// The commitment to the multiplication selector polynomial
    #[serde_as(as = "G1AffineDef")]
    pub qm: G1Affine,
    /// The commitment to the output selector polynomial
    #[serde_as(as = "G1AffineDef")]
    pub qo: G1Affine,
    /// The commitment to the constant selector polynomial
    #[serde_as(as = "G1AffineDef")]
    pub qk: G1Affine,
    /// The commitments to the custom gate selector polynomials
    #[serde_as(as = "Vec<G1AffineDef>")]
    pub qcp: Vec<G1Affine>,
    /// The index of the constraint associated with each custom gate commitment
    pub commitment_constraint_indexes: Vec<u64>,
}

impl VerificationKey {
    /// The number of custom gates in the circuit, as recorded by the
    /// constraint indexes
    pub fn num_custom_gates(&self) -> usize {
        self.commitment_constraint_indexes.len()
    }
}
