//! Orchestration interfaces.

use std::time::Duration;

use serde::Serialize;

use matcalc_core::calculator::MatError;
use matcalc_core::memory_budget::MemoryEstimate;
use matcalc_core::method::MultiplicationMethod;
use matcalc_core::Matrix;

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present a single calculation result.
    fn present_result(&self, result: &CalculationResult);

    /// Present a comparison of several results.
    fn present_comparison(&self, results: &[CalculationResult]);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Result of a single calculation.
#[derive(Debug, Clone)]
pub struct CalculationResult {
    /// Algorithm name.
    pub algorithm: String,
    /// Which method produced this result.
    pub method: MultiplicationMethod,
    /// Operand size.
    pub size: usize,
    /// The product or a structured error.
    pub outcome: Result<Matrix, MatError>,
    /// Computation duration.
    pub duration: Duration,
    /// Estimated memory use.
    pub memory: MemoryEstimate,
}

impl CalculationResult {
    /// Serializable view of this result; the product is included on request.
    #[must_use]
    pub fn summary(&self, include_matrix: bool) -> ResultSummary {
        ResultSummary {
            algorithm: self.algorithm.clone(),
            method: self.method,
            size: self.size,
            duration_secs: self.duration.as_secs_f64(),
            memory: self.memory,
            error: self.outcome.as_ref().err().map(ToString::to_string),
            result: if include_matrix {
                self.outcome.as_ref().ok().cloned()
            } else {
                None
            },
        }
    }
}

/// Machine-readable summary of a [`CalculationResult`].
#[derive(Debug, Clone, Serialize)]
pub struct ResultSummary {
    pub algorithm: String,
    pub method: MultiplicationMethod,
    pub size: usize,
    pub duration_secs: f64,
    pub memory: MemoryEstimate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Matrix>,
}
