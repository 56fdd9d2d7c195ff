//! Miscellaneous test helpers

use ark_std::UniformRand;
use rand::Rng;
use vkey_common::types::G1Affine;

/// Samples `n` uniformly random G1 points
pub fn random_g1_points(n: usize, rng: &mut impl Rng) -> Vec<G1Affine> {
    (0..n).map(|_| G1Affine::rand(rng)).collect()
}
