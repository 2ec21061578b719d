//! Memory budget estimation and validation.
//!
//! The figures are a reporting heuristic, not an accounting of actual
//! allocations.

use serde::{Deserialize, Serialize};

use crate::calculator::MatError;
use crate::constants::ELEMENT_BYTES;
use crate::method::MultiplicationMethod;
use crate::options::Options;

/// Temporaries held per Strassen level: 8 quadrants plus 2 operand sums.
const STRASSEN_TEMPS_PER_LEVEL: u64 = 10;

const ELEMENT: u64 = ELEMENT_BYTES as u64;

/// Memory estimate for one multiplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryEstimate {
    /// Bytes held by A, B and C.
    pub matrix_bytes: u64,
    /// Bytes of algorithm temporaries (padding copies, recursion sub-matrices).
    pub extra_bytes: u64,
    /// Total estimated bytes.
    pub total_bytes: u64,
}

fn square_bytes(n: u64) -> u64 {
    n.saturating_mul(n).saturating_mul(ELEMENT)
}

/// Extra bytes used by the Strassen recursion on a power-of-two `size`.
///
/// Each level above the threshold holds ten half-size matrices and recurses
/// seven times.
#[must_use]
pub fn strassen_extra_memory(size: u64, threshold: u64) -> u64 {
    if size <= threshold.max(1) {
        return 0;
    }
    let half = size / 2;
    let per_call = STRASSEN_TEMPS_PER_LEVEL.saturating_mul(square_bytes(half));
    per_call.saturating_add(7u64.saturating_mul(strassen_extra_memory(half, threshold)))
}

impl MemoryEstimate {
    /// Estimate memory for multiplying two `n x n` matrices with `method`.
    #[must_use]
    pub fn estimate(method: MultiplicationMethod, n: usize, opts: &Options) -> Self {
        let n = n as u64;
        let matrix_bytes = square_bytes(n).saturating_mul(3);

        let extra_bytes = match method {
            MultiplicationMethod::Naive | MultiplicationMethod::Blocked => 0,
            MultiplicationMethod::Strassen if n == 0 => 0,
            MultiplicationMethod::Strassen => {
                let m = n.checked_next_power_of_two().unwrap_or(u64::MAX);
                // Padded copies of A, B and the padded product.
                let padding = if m == n {
                    0
                } else {
                    square_bytes(m).saturating_mul(3)
                };
                padding.saturating_add(strassen_extra_memory(m, opts.strassen_threshold as u64))
            }
        };

        Self {
            matrix_bytes,
            extra_bytes,
            total_bytes: matrix_bytes.saturating_add(extra_bytes),
        }
    }

    /// Check if the computation fits within the given memory limit.
    ///
    /// `None` means unlimited (always fits).
    #[must_use]
    pub fn fits_in(&self, limit: Option<u64>) -> bool {
        match limit {
            None => true,
            Some(l) => self.total_bytes <= l,
        }
    }

    /// Like [`fits_in`](Self::fits_in), but as a `Result`.
    pub fn ensure_fits(&self, limit: Option<u64>) -> Result<(), MatError> {
        match limit {
            Some(limit) if !self.fits_in(Some(limit)) => Err(MatError::MemoryLimit {
                estimated: self.total_bytes,
                limit,
            }),
            _ => Ok(()),
        }
    }
}

/// Parse a memory limit string (e.g., "8G", "512M", "1024K").
///
/// An empty string means unlimited and parses to 0.
pub fn parse_memory_limit(s: &str) -> Result<u64, MatError> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(0);
    }

    let (num_str, multiplier) = if let Some(n) = s.strip_suffix('G') {
        (n, 1024 * 1024 * 1024)
    } else if let Some(n) = s.strip_suffix('M') {
        (n, 1024 * 1024)
    } else if let Some(n) = s.strip_suffix('K') {
        (n, 1024)
    } else if let Some(n) = s.strip_suffix('B') {
        (n, 1)
    } else {
        (s, 1)
    };

    let value: u64 = num_str
        .trim()
        .parse()
        .map_err(|e| MatError::Config(format!("invalid memory limit {s:?}: {e}")))?;
    value
        .checked_mul(multiplier)
        .ok_or_else(|| MatError::Config(format!("memory limit {s:?} is too large")))
}
