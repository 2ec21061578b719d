//! # matcalc-core
//!
//! Core library for the MatCalc-rs square matrix multiplication engine.
//! Implements naive, blocked, and Strassen multiplication over `i32`
//! with wrapping arithmetic, so every algorithm returns the same product.

pub mod blocked;
pub mod calculator;
pub mod constants;
pub mod matrix_ops;
pub mod matrix_types;
pub mod memory_budget;
pub mod method;
pub mod naive;
pub mod options;
pub mod registry;
pub mod strassen;

// Re-exports
pub use blocked::multiply_blocked;
pub use calculator::{Calculator, CoreCalculator, MatCalculator, MatError};
pub use constants::{exit_codes, DEFAULT_BLOCK_SIZE, DEFAULT_PRINT_LIMIT, DEFAULT_STRASSEN_THRESHOLD};
pub use matrix_types::{validate_size, Matrix};
pub use memory_budget::MemoryEstimate;
pub use method::MultiplicationMethod;
pub use naive::multiply_naive;
pub use options::Options;
pub use registry::{CalculatorFactory, DefaultFactory};
pub use strassen::{multiply_strassen, multiply_strassen_with_threshold};
