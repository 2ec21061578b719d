//! Tiled (blocked) matrix multiplication.
//!
//! Iterates over `block_size` tiles of the i, j and k axes and accumulates
//! partial sums inside each tile so the working set stays cache-resident.

use crate::calculator::{ensure_same_size, CoreCalculator, MatError};
use crate::matrix_types::Matrix;
use crate::options::Options;

/// Multiply two equal-size matrices tile by tile.
pub fn multiply_blocked(a: &Matrix, b: &Matrix, block_size: usize) -> Result<Matrix, MatError> {
    let n = ensure_same_size(a, b)?;
    if block_size == 0 {
        return Err(MatError::Config("block size must be at least 1".into()));
    }

    let mut c = Matrix::zeros(n)?;
    for ii in (0..n).step_by(block_size) {
        let i_max = (ii + block_size).min(n);
        for jj in (0..n).step_by(block_size) {
            let j_max = (jj + block_size).min(n);
            for kk in (0..n).step_by(block_size) {
                let k_max = (kk + block_size).min(n);
                for i in ii..i_max {
                    let a_row = &a.row(i)[kk..k_max];
                    let c_row = &mut c.row_mut(i)[jj..j_max];
                    for (k, &aik) in (kk..k_max).zip(a_row) {
                        for (cij, &bkj) in c_row.iter_mut().zip(&b.row(k)[jj..j_max]) {
                            *cij = cij.wrapping_add(aik.wrapping_mul(bkj));
                        }
                    }
                }
            }
        }
    }
    Ok(c)
}

/// Blocked multiplication calculator.
pub struct BlockedMultiplication;

impl BlockedMultiplication {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for BlockedMultiplication {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreCalculator for BlockedMultiplication {
    fn multiply_core(&self, a: &Matrix, b: &Matrix, opts: &Options) -> Result<Matrix, MatError> {
        multiply_blocked(a, b, opts.block_size)
    }

    fn name(&self) -> &'static str {
        "Blocked"
    }
}
