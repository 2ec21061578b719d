//! CLI result presenter.

use matcalc_core::Matrix;
use matcalc_orchestration::interfaces::{CalculationResult, ResultPresenter};

use crate::output::{format_bytes, format_duration, format_matrix};
use crate::ui;

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
    print_limit: usize,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool, print_limit: usize) -> Self {
        Self {
            verbose,
            quiet,
            print_limit,
        }
    }

    /// Whether an `n x n` matrix is small enough to print.
    #[must_use]
    pub fn should_print(&self, n: usize) -> bool {
        n <= self.print_limit
    }

    /// Text shown for a single result.
    #[must_use]
    pub fn render_result(&self, result: &CalculationResult) -> String {
        let n = result.size;
        let name = &result.algorithm;

        let mut out = match &result.outcome {
            Ok(product) if self.quiet => return plain_rows(product),
            Err(_) if self.quiet => return String::new(),
            Ok(product) if self.should_print(n) => format!(
                "Multiplication ({name}) completed.\n{}",
                format_matrix("C", product)
            ),
            Ok(_) => format!(
                "Multiplication ({name}) completed.\n\
                 Result matrix C ({n}x{n}) computed. Not printed due to its size.\n"
            ),
            Err(e) => format!("Multiplication ({name}) failed: {e}\n"),
        };

        out.push_str(&format!(
            "--- Performance ({name}) ---\nDuration: {}\nEstimated memory: {}\n",
            format_duration(result.duration),
            format_bytes(result.memory.total_bytes)
        ));
        if self.verbose {
            out.push_str(&format!(
                "  matrices: {}\n  temporaries: {}\n",
                format_bytes(result.memory.matrix_bytes),
                format_bytes(result.memory.extra_bytes)
            ));
        }
        out
    }

    /// Text shown for a comparison table.
    #[must_use]
    pub fn render_comparison(&self, results: &[CalculationResult]) -> String {
        if self.quiet || results.is_empty() {
            return String::new();
        }

        let mut out = format!("\nComparison Results:\n{:-<72}\n", "");
        for result in results {
            out.push_str(&format!(
                "  {:<12} {:>12} {:>16} [{}]\n",
                result.algorithm,
                format_duration(result.duration),
                format!("{} bytes", result.memory.total_bytes),
                ui::status_tag(result.outcome.is_ok()),
            ));
        }
        out
    }
}

/// Space-separated rows, one per line.
fn plain_rows(matrix: &Matrix) -> String {
    matrix
        .rows()
        .map(|row| {
            let cells: Vec<String> = row.iter().map(ToString::to_string).collect();
            cells.join(" ") + "\n"
        })
        .collect()
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(&self, result: &CalculationResult) {
        print!("{}", self.render_result(result));
    }

    fn present_comparison(&self, results: &[CalculationResult]) {
        print!("{}", self.render_comparison(results));
    }

    fn present_error(&self, error: &str) {
        ui::print_error(error);
    }
}
