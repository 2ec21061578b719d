//! Multiplication options and configuration.

use crate::constants::{DEFAULT_BLOCK_SIZE, DEFAULT_STRASSEN_THRESHOLD};

/// Tunables shared by all multipliers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Sub-problem size at or below which Strassen falls back to the naive kernel.
    pub strassen_threshold: usize,
    /// Tile edge for blocked multiplication.
    pub block_size: usize,
    /// Memory limit in bytes (0 = unlimited).
    pub memory_limit: u64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            strassen_threshold: DEFAULT_STRASSEN_THRESHOLD,
            block_size: DEFAULT_BLOCK_SIZE,
            memory_limit: 0,
        }
    }
}

impl Options {
    /// Normalize options, applying defaults where values are zero.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.strassen_threshold == 0 {
            self.strassen_threshold = DEFAULT_STRASSEN_THRESHOLD;
        }
        if self.block_size == 0 {
            self.block_size = DEFAULT_BLOCK_SIZE;
        }
        self
    }

    /// The memory limit, or `None` when unlimited.
    #[must_use]
    pub fn memory_limit(&self) -> Option<u64> {
        (self.memory_limit > 0).then_some(self.memory_limit)
    }
}
