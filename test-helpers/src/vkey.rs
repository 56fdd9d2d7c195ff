//! Helpers for building verification keys in tests

use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::{FftField, Field, Zero};
use ark_std::UniformRand;
use rand::Rng;
use vkey_common::types::{G1Affine, G2Affine, KzgOpeningKey, ScalarField, VerificationKey};

use crate::misc::random_g1_points;

/// Generates a verification key with random commitments over a domain of size `2^log_size`.
///
/// The domain values (size inverse, generator, coset shift) and the KZG opening key are
/// consistent with one another, the commitments are arbitrary points.
pub fn random_vkey(log_size: u32, num_custom_gates: usize, rng: &mut impl Rng) -> VerificationKey {
    let size = 1u64 << log_size;
    let size_inv = ScalarField::from(size).inverse().unwrap();
    let generator = ScalarField::get_root_of_unity(size).unwrap();

    let tau = ScalarField::rand(rng);
    let g2 = G2Affine::generator();
    let kzg = KzgOpeningKey {
        g1: G1Affine::generator(),
        g2: [g2, (g2 * tau).into_affine()],
    };

    let mut commitment_constraint_indexes: Vec<u64> = (0..num_custom_gates)
        .map(|_| rng.gen_range(0..size))
        .collect();
    commitment_constraint_indexes.sort_unstable();

    let [ql, qr, qm, qo, qk, s1, s2, s3]: [G1Affine; 8] =
        random_g1_points(8, rng).try_into().unwrap();

    VerificationKey {
        size,
        size_inv,
        generator,
        num_public_inputs: rng.gen_range(0..size),
        kzg,
        coset_shift: ScalarField::GENERATOR,
        s: [s1, s2, s3],
        ql,
        qr,
        qm,
        qo,
        qk,
        qcp: random_g1_points(num_custom_gates, rng),
        commitment_constraint_indexes,
    }
}

/// Builds a verification key whose field elements and points are all zero,
/// with one identity commitment per constraint index
pub fn zero_vkey(
    size: u64,
    num_public_inputs: u64,
    commitment_constraint_indexes: Vec<u64>,
) -> VerificationKey {
    let zero_g1 = G1Affine::identity();
    let zero_g2 = G2Affine::identity();

    VerificationKey {
        size,
        size_inv: ScalarField::zero(),
        generator: ScalarField::zero(),
        num_public_inputs,
        kzg: KzgOpeningKey {
            g1: zero_g1,
            g2: [zero_g2; 2],
        },
        coset_shift: ScalarField::zero(),
        s: [zero_g1; 3],
        ql: zero_g1,
        qr: zero_g1,
        qm: zero_g1,
        qo: zero_g1,
        qk: zero_g1,
        qcp: vec![zero_g1; commitment_constraint_indexes.len()],
        commitment_constraint_indexes,
    }
}
