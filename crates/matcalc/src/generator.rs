//! Random operand generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use matcalc_core::constants::RANDOM_ELEMENT_BOUND;
use matcalc_core::{MatError, Matrix};

/// RNG for operand generation, reproducible when a seed is given.
#[must_use]
pub fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64)
}

/// An `n x n` matrix with elements drawn uniformly from `0..RANDOM_ELEMENT_BOUND`.
pub fn random_matrix<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<Matrix, MatError> {
    let mut m = Matrix::zeros(n)?;
    for value in m.as_mut_slice() {
        *value = rng.gen_range(0..RANDOM_ELEMENT_BOUND);
    }
    Ok(m)
}
