//! Constants for multiplication thresholds and configuration.

/// Default Strassen crossover: sub-problems of this size or smaller use the naive kernel.
pub const DEFAULT_STRASSEN_THRESHOLD: usize = 64;

/// Default tile edge for blocked multiplication.
pub const DEFAULT_BLOCK_SIZE: usize = 32;

/// Matrices larger than this are not printed by default.
pub const DEFAULT_PRINT_LIMIT: usize = 10;

/// Upper bound (exclusive) for randomly generated elements.
pub const RANDOM_ELEMENT_BOUND: i32 = 10;

/// Size in bytes of one matrix element.
pub const ELEMENT_BYTES: usize = std::mem::size_of::<i32>();

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Algorithm results did not match during cross-validation.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration or input.
    pub const ERROR_CONFIG: i32 = 4;
    /// Memory could not be obtained or the estimate exceeds the limit.
    pub const ERROR_MEMORY: i32 = 5;
}
