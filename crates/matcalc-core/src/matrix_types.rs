//! Square integer matrix type.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::calculator::MatError;

/// Square `n x n` matrix of `i32`, stored as a flat row-major buffer.
///
/// Serializes as a list of rows so that test data and reports stay readable.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<i32>>", into = "Vec<Vec<i32>>")]
pub struct Matrix {
    size: usize,
    data: Vec<i32>,
}

/// Convert a caller-supplied signed size into a matrix size.
///
/// # Errors
///
/// Returns [`MatError::InvalidSize`] for negative sizes.
pub fn validate_size(size: i64) -> Result<usize, MatError> {
    usize::try_from(size).map_err(|_| MatError::InvalidSize(size))
}

impl Matrix {
    /// The empty `0 x 0` matrix.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Allocate a zero-initialized matrix.
    ///
    /// Fails with [`MatError::AllocationFailure`] if `size * size` overflows
    /// or the allocator cannot provide the buffer.
    pub fn zeros(size: usize) -> Result<Self, MatError> {
        let len = size
            .checked_mul(size)
            .ok_or(MatError::AllocationFailure(size))?;
        let mut data = Vec::new();
        if let Err(e) = data.try_reserve_exact(len) {
            tracing::error!(size, error = %e, "matrix allocation failed");
            return Err(MatError::AllocationFailure(size));
        }
        data.resize(len, 0);
        Ok(Self { size, data })
    }

    /// Allocate a zero-initialized matrix from a signed size.
    ///
    /// Negative sizes are rejected before any allocation.
    pub fn allocate(size: i64) -> Result<Self, MatError> {
        Self::zeros(validate_size(size)?)
    }

    /// Create the identity matrix of the given size.
    pub fn identity(size: usize) -> Result<Self, MatError> {
        let mut m = Self::zeros(size)?;
        for i in 0..size {
            m[(i, i)] = 1;
        }
        Ok(m)
    }

    /// Build a matrix from its rows. Every row must have as many elements as there are rows.
    pub fn from_rows(rows: Vec<Vec<i32>>) -> Result<Self, MatError> {
        let size = rows.len();
        let mut m = Self::zeros(size)?;
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(MatError::NotSquare {
                    row: r,
                    len: row.len(),
                    expected: size,
                });
            }
            m.row_mut(r).copy_from_slice(&row);
        }
        Ok(m)
    }

    /// Build a matrix from a row-major buffer of exactly `size * size` elements.
    pub fn from_vec(size: usize, data: Vec<i32>) -> Result<Self, MatError> {
        let expected = size
            .checked_mul(size)
            .ok_or(MatError::AllocationFailure(size))?;
        if data.len() != expected {
            return Err(MatError::BufferLength {
                len: data.len(),
                expected,
            });
        }
        Ok(Self { size, data })
    }

    /// Number of rows (and columns).
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// True for the 0x0 matrix.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Element at `(row, col)`, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<i32> {
        if row < self.size && col < self.size {
            Some(self.data[row * self.size + col])
        } else {
            None
        }
    }

    /// Borrow one row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[i32] {
        let start = row * self.size;
        &self.data[start..start + self.size]
    }

    /// Mutably borrow one row.
    pub fn row_mut(&mut self, row: usize) -> &mut [i32] {
        let start = row * self.size;
        &mut self.data[start..start + self.size]
    }

    /// Iterate over rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[i32]> {
        // chunks_exact panics on 0, and an empty matrix has no rows anyway.
        self.data.chunks_exact(self.size.max(1))
    }

    /// Copy the matrix out as nested rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<i32>> {
        self.rows().map(<[i32]>::to_vec).collect()
    }

    /// The row-major element buffer.
    #[must_use]
    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }

    /// Mutable access to the row-major element buffer.
    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        &mut self.data
    }

    /// True if every element is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|&x| x == 0)
    }

    /// True if this is an identity matrix.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.rows()
            .enumerate()
            .all(|(r, row)| row.iter().enumerate().all(|(c, &x)| x == i32::from(r == c)))
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = i32;

    fn index(&self, (row, col): (usize, usize)) -> &i32 {
        assert!(col < self.size, "column {col} out of bounds for size {}", self.size);
        &self.data[row * self.size + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut i32 {
        assert!(col < self.size, "column {col} out of bounds for size {}", self.size);
        &mut self.data[row * self.size + col]
    }
}

impl TryFrom<Vec<Vec<i32>>> for Matrix {
    type Error = MatError;

    fn try_from(rows: Vec<Vec<i32>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Matrix> for Vec<Vec<i32>> {
    fn from(m: Matrix) -> Self {
        m.to_rows()
    }
}
