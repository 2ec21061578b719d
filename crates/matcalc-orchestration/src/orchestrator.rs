//! Core orchestration: timed execution and result analysis.
//!
//! Calculators run one after another on the calling thread so their
//! timings are not skewed by each other.

use std::time::Instant;

use matcalc_core::calculator::MatError;
use matcalc_core::memory_budget::MemoryEstimate;
use matcalc_core::options::Options;
use matcalc_core::Matrix;

use crate::calculator_selection::SelectedCalculator;
use crate::interfaces::CalculationResult;

/// Multiply `a * b` with every selected calculator.
pub fn execute_calculations(
    calculators: &[SelectedCalculator],
    a: &Matrix,
    b: &Matrix,
    opts: &Options,
) -> Vec<CalculationResult> {
    calculators
        .iter()
        .map(|selected| {
            let calc = &selected.calculator;
            let memory = MemoryEstimate::estimate(selected.method, a.size(), opts);

            let start = Instant::now();
            let outcome = calc.multiply(a, b, opts);
            let duration = start.elapsed();

            match &outcome {
                Ok(_) => tracing::debug!(
                    algorithm = calc.name(),
                    size = a.size(),
                    ?duration,
                    "multiplication finished"
                ),
                Err(e) => tracing::error!(algorithm = calc.name(), error = %e, "multiplication failed"),
            }

            CalculationResult {
                algorithm: calc.name().to_string(),
                method: selected.method,
                size: a.size(),
                outcome,
                duration,
                memory,
            }
        })
        .collect()
}

/// Analyze comparison results for mismatches.
///
/// Succeeds when every successful product is identical. If nothing succeeded,
/// the first error is returned.
pub fn analyze_comparison_results(results: &[CalculationResult]) -> Result<(), MatError> {
    let mut valid = results.iter().filter_map(|r| r.outcome.as_ref().ok().map(|m| (r, m)));

    let Some((first, first_value)) = valid.next() else {
        return match results.iter().find_map(|r| r.outcome.as_ref().err()) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        };
    };

    // Compare all results to the first valid one
    for (result, value) in valid {
        if value != first_value {
            tracing::warn!(
                reference = %first.algorithm,
                other = %result.algorithm,
                "products differ"
            );
            return Err(MatError::Mismatch);
        }
    }

    Ok(())
}
