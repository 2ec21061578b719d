//! # matcalc-orchestration
//!
//! Calculator selection, timed execution, and result cross-validation.

pub mod calculator_selection;
pub mod interfaces;
pub mod orchestrator;

pub use calculator_selection::{get_calculators_to_run, SelectedCalculator};
pub use interfaces::{CalculationResult, ResultPresenter, ResultSummary};
pub use orchestrator::{analyze_comparison_results, execute_calculations};
