//! Classic O(n³) matrix multiplication.
//!
//! Computes `C[i][j] = Σ_k A[i][k] * B[k][j]` with wrapping `i32` arithmetic.
//! The loops run in i-k-j order so the inner loop walks rows of B and C
//! sequentially; the sum for each element is unchanged.

use crate::calculator::{ensure_same_size, CoreCalculator, MatError};
use crate::matrix_types::Matrix;
use crate::options::Options;

/// Multiply two matrices of equal size with the triple-loop algorithm.
///
/// # Example
/// ```
/// use matcalc_core::{multiply_naive, Matrix};
///
/// let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
/// let b = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap();
/// let c = multiply_naive(&a, &b).unwrap();
/// assert_eq!(c.to_rows(), vec![vec![19, 22], vec![43, 50]]);
/// ```
pub fn multiply_naive(a: &Matrix, b: &Matrix) -> Result<Matrix, MatError> {
    ensure_same_size(a, b)?;
    naive_kernel(a, b)
}

/// Triple-loop product of two matrices already known to share a size.
pub(crate) fn naive_kernel(a: &Matrix, b: &Matrix) -> Result<Matrix, MatError> {
    let n = a.size();
    let mut c = Matrix::zeros(n)?;
    for i in 0..n {
        let a_row = a.row(i);
        let c_row = c.row_mut(i);
        for (k, &aik) in a_row.iter().enumerate() {
            if aik == 0 {
                continue;
            }
            for (cij, &bkj) in c_row.iter_mut().zip(b.row(k)) {
                *cij = cij.wrapping_add(aik.wrapping_mul(bkj));
            }
        }
    }
    Ok(c)
}

/// Naive multiplication calculator.
pub struct NaiveMultiplication;

impl NaiveMultiplication {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for NaiveMultiplication {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreCalculator for NaiveMultiplication {
    fn multiply_core(
        &self,
        a: &Matrix,
        b: &Matrix,
        _opts: &Options,
    ) -> Result<Matrix, MatError> {
        multiply_naive(a, b)
    }

    fn name(&self) -> &'static str {
        "Naive"
    }
}
