//! Calculator traits and the `MatCalculator` decorator.
//!
//! `Calculator` is the public trait consumed by orchestration.
//! `CoreCalculator` is the internal trait implemented by algorithms.
//! `MatCalculator` is a decorator that validates operands and handles the empty fast path.

use std::sync::Arc;

use crate::matrix_types::Matrix;
use crate::options::Options;

/// Error type for matrix calculations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatError {
    /// A negative matrix size was requested.
    #[error("invalid matrix size {0}: size must not be negative")]
    InvalidSize(i64),

    /// Operands do not have the same size.
    #[error("size mismatch: cannot multiply {left}x{left} by {right}x{right}")]
    SizeMismatch { left: usize, right: usize },

    /// Input rows do not form a square matrix.
    #[error("matrix is not square: row {row} has {len} elements, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// A row-major buffer does not hold `size * size` elements.
    #[error("buffer holds {len} elements, expected {expected}")]
    BufferLength { len: usize, expected: usize },

    /// Memory for a matrix of the given size could not be obtained.
    #[error("allocation failure for a {0}x{0} matrix")]
    AllocationFailure(usize),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// The memory estimate exceeds the configured limit.
    #[error("estimated memory ({estimated} bytes) exceeds limit ({limit} bytes)")]
    MemoryLimit { estimated: u64, limit: u64 },

    /// Results from different algorithms don't match.
    #[error("result mismatch between algorithms")]
    Mismatch,
}

/// Public trait for matrix multipliers, consumed by orchestration.
pub trait Calculator: Send + Sync {
    /// Compute `a * b` with the given options.
    fn multiply(&self, a: &Matrix, b: &Matrix, opts: &Options) -> Result<Matrix, MatError>;

    /// Get the name of this calculator.
    fn name(&self) -> &str;
}

/// Internal trait for algorithm implementations.
///
/// Implementors may assume both operands have the same non-zero size.
pub trait CoreCalculator: Send + Sync {
    /// Perform the core multiplication.
    fn multiply_core(&self, a: &Matrix, b: &Matrix, opts: &Options)
        -> Result<Matrix, MatError>;

    /// Get the name of this algorithm.
    fn name(&self) -> &str;
}

/// Reject operands of unequal size.
pub(crate) fn ensure_same_size(a: &Matrix, b: &Matrix) -> Result<usize, MatError> {
    if a.size() == b.size() {
        Ok(a.size())
    } else {
        Err(MatError::SizeMismatch {
            left: a.size(),
            right: b.size(),
        })
    }
}

/// Decorator that wraps a `CoreCalculator` with validation and the empty fast path.
pub struct MatCalculator {
    inner: Arc<dyn CoreCalculator>,
}

impl MatCalculator {
    /// Create a new `MatCalculator` wrapping the given core calculator.
    #[must_use]
    pub fn new(inner: Arc<dyn CoreCalculator>) -> Self {
        Self { inner }
    }
}

impl Calculator for MatCalculator {
    fn multiply(&self, a: &Matrix, b: &Matrix, opts: &Options) -> Result<Matrix, MatError> {
        let n = ensure_same_size(a, b)?;
        if n == 0 {
            return Ok(Matrix::empty());
        }

        tracing::debug!(algorithm = self.inner.name(), size = n, "multiplying");
        self.inner.multiply_core(a, b, opts)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
