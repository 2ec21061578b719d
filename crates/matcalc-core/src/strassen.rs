//! Strassen's divide-and-conquer matrix multiplication.
//!
//! Operands are zero-padded to the next power of two so every split is exact,
//! each level computes seven half-size products instead of eight, and any
//! sub-problem at or below the threshold is handed to the naive kernel.
//! The result equals the naive product element for element, wraparound included.

use crate::calculator::{ensure_same_size, CoreCalculator, MatError};
use crate::constants::DEFAULT_STRASSEN_THRESHOLD;
use crate::matrix_ops::{
    add, add_assign, join_quadrants, pad_to, split_quadrants, sub, sub_assign, top_left, Quadrants,
};
use crate::matrix_types::Matrix;
use crate::naive::naive_kernel;
use crate::options::Options;

/// Smallest power of two that is `>= n` (and at least 1).
pub fn padded_size(n: usize) -> Result<usize, MatError> {
    n.checked_next_power_of_two()
        .ok_or(MatError::AllocationFailure(n))
}

/// Number of recursive halvings performed for a size-`n` problem.
#[must_use]
pub fn recursion_depth(n: usize, threshold: usize) -> u32 {
    let mut m = n.checked_next_power_of_two().unwrap_or(0);
    let mut depth = 0;
    while m > threshold.max(1) {
        m /= 2;
        depth += 1;
    }
    depth
}

/// Multiply with Strassen's algorithm using the default threshold.
///
/// # Example
/// ```
/// use matcalc_core::{multiply_strassen, Matrix};
///
/// let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
/// let b = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap();
/// let c = multiply_strassen(&a, &b).unwrap();
/// assert_eq!(c.to_rows(), vec![vec![19, 22], vec![43, 50]]);
/// ```
pub fn multiply_strassen(a: &Matrix, b: &Matrix) -> Result<Matrix, MatError> {
    multiply_strassen_with_threshold(a, b, DEFAULT_STRASSEN_THRESHOLD)
}

/// Multiply with Strassen's algorithm, recursing until sub-problems reach `threshold`.
///
/// The threshold only affects performance. It must be at least 1.
pub fn multiply_strassen_with_threshold(
    a: &Matrix,
    b: &Matrix,
    threshold: usize,
) -> Result<Matrix, MatError> {
    let n = ensure_same_size(a, b)?;
    if threshold == 0 {
        return Err(MatError::Config(
            "strassen threshold must be at least 1".into(),
        ));
    }
    if n == 0 {
        return Ok(Matrix::empty());
    }

    let m = padded_size(n)?;
    tracing::debug!(
        size = n,
        padded = m,
        threshold,
        depth = recursion_depth(n, threshold),
        "strassen multiply"
    );

    multiply_padded(a, b, m, threshold)
}

/// Pad both operands to `m`, multiply, and crop back to the operand size.
fn multiply_padded(
    a: &Matrix,
    b: &Matrix,
    m: usize,
    threshold: usize,
) -> Result<Matrix, MatError> {
    let n = a.size();
    if m == n {
        return strassen_recursive(a, b, threshold);
    }

    let c = {
        let a_padded = pad_to(a, m)?;
        let b_padded = pad_to(b, m)?;
        strassen_recursive(&a_padded, &b_padded, threshold)?
    };
    top_left(&c, n)
}

/// Recursive step on power-of-two operands of equal size.
fn strassen_recursive(a: &Matrix, b: &Matrix, threshold: usize) -> Result<Matrix, MatError> {
    let m = a.size();
    if m <= threshold {
        return naive_kernel(a, b);
    }
    tracing::trace!(size = m, "strassen split");

    let Quadrants {
        q11: a11,
        q12: a12,
        q21: a21,
        q22: a22,
    } = split_quadrants(a)?;
    let Quadrants {
        q11: b11,
        q12: b12,
        q21: b21,
        q22: b22,
    } = split_quadrants(b)?;

    let p1 = strassen_recursive(&add(&a11, &a22)?, &add(&b11, &b22)?, threshold)?;
    let p2 = strassen_recursive(&add(&a21, &a22)?, &b11, threshold)?;
    let p3 = strassen_recursive(&a11, &sub(&b12, &b22)?, threshold)?;
    let p4 = strassen_recursive(&a22, &sub(&b21, &b11)?, threshold)?;
    let p5 = strassen_recursive(&add(&a11, &a12)?, &b22, threshold)?;
    let p6 = strassen_recursive(&sub(&a21, &a11)?, &add(&b11, &b12)?, threshold)?;
    let p7 = strassen_recursive(&sub(&a12, &a22)?, &add(&b21, &b22)?, threshold)?;

    // C11 = P1 + P4 - P5 + P7
    let mut c11 = add(&p1, &p4)?;
    sub_assign(&mut c11, &p5)?;
    add_assign(&mut c11, &p7)?;
    // C12 = P3 + P5
    let c12 = add(&p3, &p5)?;
    // C21 = P2 + P4
    let c21 = add(&p2, &p4)?;
    // C22 = P1 - P2 + P3 + P6
    let mut c22 = sub(&p1, &p2)?;
    add_assign(&mut c22, &p3)?;
    add_assign(&mut c22, &p6)?;

    join_quadrants(&Quadrants {
        q11: c11,
        q12: c12,
        q21: c21,
        q22: c22,
    })
}

/// Strassen multiplication calculator.
pub struct StrassenMultiplication;

impl StrassenMultiplication {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for StrassenMultiplication {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreCalculator for StrassenMultiplication {
    fn multiply_core(&self, a: &Matrix, b: &Matrix, opts: &Options) -> Result<Matrix, MatError> {
        multiply_strassen_with_threshold(a, b, opts.strassen_threshold)
    }

    fn name(&self) -> &'static str {
        "Strassen"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naive::multiply_naive;

    fn m(rows: Vec<Vec<i32>>) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    /// Deterministic pseudo-random fill, values in -50..50.
    fn sample(n: usize, seed: u32) -> Matrix {
        let mut state = seed.wrapping_mul(2_654_435_761).wrapping_add(1);
        let data = (0..n * n)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 17;
                state ^= state << 5;
                i32::try_from(state % 100).unwrap() - 50
            })
            .collect();
        Matrix::from_vec(n, data).unwrap()
    }

    #[test]
    fn padded_sizes() {
        assert_eq!(padded_size(1).unwrap(), 1);
        assert_eq!(padded_size(3).unwrap(), 4);
        assert_eq!(padded_size(64).unwrap(), 64);
        assert_eq!(padded_size(65).unwrap(), 128);
        assert!(padded_size(usize::MAX).is_err());
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn padding_allocation_failure_is_an_error() {
        let one = m(vec![vec![3]]);
        let big = 1usize << 31;
        assert_eq!(
            multiply_padded(&one, &one, big, 1),
            Err(MatError::AllocationFailure(big))
        );
    }

    #[test]
    fn depth_follows_threshold() {
        assert_eq!(recursion_depth(64, 64), 0);
        assert_eq!(recursion_depth(65, 64), 1);
        assert_eq!(recursion_depth(17, 1), 5);
        assert_eq!(recursion_depth(4, 2), 1);
    }

    #[test]
    fn two_by_two_full_recursion() {
        let a = m(vec![vec![1, 2], vec![3, 4]]);
        let b = m(vec![vec![5, 6], vec![7, 8]]);
        let expected = m(vec![vec![19, 22], vec![43, 50]]);
        assert_eq!(multiply_strassen(&a, &b).unwrap(), expected);
        assert_eq!(multiply_strassen_with_threshold(&a, &b, 1).unwrap(), expected);
    }

    #[test]
    fn odd_size_is_padded_and_unpadded() {
        let a = m(vec![vec![1, 0, 2], vec![0, 1, 1], vec![1, 1, 0]]);
        let b = m(vec![vec![1, 1, 0], vec![0, 1, 0], vec![0, 0, 1]]);
        let expected = m(vec![vec![1, 1, 2], vec![0, 1, 1], vec![1, 2, 0]]);
        for threshold in [1, 2, 4, 64] {
            let c = multiply_strassen_with_threshold(&a, &b, threshold).unwrap();
            assert_eq!(c.size(), 3);
            assert_eq!(c, expected, "threshold {threshold}");
        }
    }

    #[test]
    fn matches_naive_across_sizes() {
        for n in [0, 1, 2, 3, 5, 8, 17, 33] {
            let a = sample(n, 7);
            let b = sample(n, 11);
            let naive = multiply_naive(&a, &b).unwrap();
            for threshold in [1, 2, 8] {
                assert_eq!(
                    multiply_strassen_with_threshold(&a, &b, threshold).unwrap(),
                    naive,
                    "n={n} threshold={threshold}"
                );
            }
        }
    }

    #[test]
    fn above_default_threshold_recurses() {
        let a = sample(70, 3);
        let b = sample(70, 5);
        assert_eq!(
            multiply_strassen(&a, &b).unwrap(),
            multiply_naive(&a, &b).unwrap()
        );
    }

    #[test]
    fn wraparound_matches_naive() {
        let a = Matrix::from_vec(4, vec![i32::MAX; 16]).unwrap();
        let b = Matrix::from_vec(4, vec![i32::MIN + 3; 16]).unwrap();
        assert_eq!(
            multiply_strassen_with_threshold(&a, &b, 1).unwrap(),
            multiply_naive(&a, &b).unwrap()
        );
    }

    #[test]
    fn rejects_mismatch_and_zero_threshold() {
        let a = Matrix::zeros(2).unwrap();
        let b = Matrix::zeros(3).unwrap();
        assert_eq!(
            multiply_strassen(&a, &b),
            Err(MatError::SizeMismatch { left: 2, right: 3 })
        );
        assert!(matches!(
            multiply_strassen_with_threshold(&a, &a, 0),
            Err(MatError::Config(_))
        ));
    }

    #[test]
    fn empty_short_circuits() {
        let e = Matrix::empty();
        assert!(multiply_strassen_with_threshold(&e, &e, 1)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn calculator_uses_option_threshold() {
        let a = sample(9, 1);
        let b = sample(9, 2);
        let opts = Options {
            strassen_threshold: 2,
            ..Options::default()
        };
        let c = StrassenMultiplication::new()
            .multiply_core(&a, &b, &opts)
            .unwrap();
        assert_eq!(c, multiply_naive(&a, &b).unwrap());
    }
}
