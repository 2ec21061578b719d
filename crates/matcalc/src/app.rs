//! Application entry point and dispatch.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use serde::Serialize;

use matcalc_cli::output::{format_bytes, format_duration, format_matrix, write_to_file};
use matcalc_cli::presenter::CLIResultPresenter;
use matcalc_cli::ui;
use matcalc_core::memory_budget::MemoryEstimate;
use matcalc_core::registry::DefaultFactory;
use matcalc_core::{validate_size, MatError, Matrix, Options};
use matcalc_orchestration::calculator_selection::{get_calculators_to_run, SelectedCalculator};
use matcalc_orchestration::interfaces::{CalculationResult, ResultPresenter, ResultSummary};
use matcalc_orchestration::orchestrator::{analyze_comparison_results, execute_calculations};

use crate::config::AppConfig;
use crate::generator::{make_rng, random_matrix};

/// Machine-readable report printed with `--json`.
#[derive(Debug, Serialize)]
pub struct JsonReport {
    pub size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub a: Option<Matrix>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub b: Option<Matrix>,
    pub results: Vec<ResultSummary>,
    pub consistent: bool,
}

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        matcalc_cli::completion::generate_completion(&mut cmd, shell, &mut io::stdout());
        return Ok(());
    }

    let opts = config.options()?;
    let factory = DefaultFactory::new();
    let calculators = get_calculators_to_run(&config.algo, &factory)?;

    let raw_size = match config.size {
        Some(size) => size,
        None => prompt_size(&mut io::stdin().lock(), &mut io::stdout())?,
    };
    let n = validate_size(raw_size)?;
    tracing::debug!(size = n, algo = %config.algo, ?opts, "starting");

    if n == 0 && !config.json {
        if !config.quiet {
            print!("{}", empty_report());
        }
        return Ok(());
    }

    check_memory(&calculators, n, &opts)?;

    let mut rng = make_rng(config.seed);
    let a = random_matrix(n, &mut rng)?;
    let b = random_matrix(n, &mut rng)?;

    let text = !config.quiet && !config.json;
    if text {
        ui::print_header(&title(&calculators));
        if n <= config.print_limit {
            print!("{}", format_matrix("A", &a));
            println!();
            print!("{}", format_matrix("B", &b));
            println!();
        } else {
            println!("Matrices A and B generated ({n}x{n}). Not printed due to their size.\n");
        }
    }

    let results = execute_calculations(&calculators, &a, &b, &opts);
    let analysis = analyze_comparison_results(&results);

    if config.json {
        let include = n <= config.print_limit;
        let report = JsonReport {
            size: n,
            seed: config.seed,
            a: include.then(|| a.clone()),
            b: include.then(|| b.clone()),
            results: results.iter().map(|r| r.summary(include)).collect(),
            consistent: analysis.is_ok(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        present(config, &results, analysis.is_ok());
    }

    if let Some(ref path) = config.output {
        if let Some(product) = results.iter().find_map(|r| r.outcome.as_ref().ok()) {
            write_to_file(path, product)?;
        }
    }

    analysis?;
    // Consistent but partial: surface the first failure.
    if let Some(err) = results.iter().find_map(|r| r.outcome.as_ref().err()) {
        return Err(err.clone().into());
    }
    Ok(())
}

fn present(config: &AppConfig, results: &[CalculationResult], consistent: bool) {
    let presenter = CLIResultPresenter::new(config.verbose, config.quiet, config.print_limit);

    if config.quiet {
        // The product once, even when several algorithms ran.
        if let Some(first) = results.iter().find(|r| r.outcome.is_ok()) {
            presenter.present_result(first);
        }
        return;
    }

    for result in results {
        presenter.present_result(result);
        println!();
    }

    if results.len() > 1 {
        presenter.present_comparison(results);
        if consistent {
            ui::print_success("All algorithms produced the same product");
        } else {
            presenter.present_error("Products differ between algorithms");
        }
    }
}

/// Ask for the matrix size on `output` and read it from `input`.
pub fn prompt_size<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<i64, MatError> {
    let io_err = |e: io::Error| MatError::Config(format!("cannot read matrix size: {e}"));

    write!(output, "Enter matrix size N: ").map_err(io_err)?;
    output.flush().map_err(io_err)?;

    let mut line = String::new();
    if input.read_line(&mut line).map_err(io_err)? == 0 {
        return Err(MatError::Config("no matrix size given".into()));
    }
    line.trim()
        .parse()
        .map_err(|_| MatError::Config(format!("invalid matrix size {:?}", line.trim())))
}

/// Refuse to run when any selected algorithm would exceed the memory limit.
fn check_memory(calculators: &[SelectedCalculator], n: usize, opts: &Options) -> Result<(), MatError> {
    for selected in calculators {
        let estimate = MemoryEstimate::estimate(selected.method, n, opts);
        tracing::debug!(method = %selected.method, total_bytes = estimate.total_bytes, "memory estimate");
        estimate.ensure_fits(opts.memory_limit())?;
    }
    Ok(())
}

fn title(calculators: &[SelectedCalculator]) -> String {
    match calculators {
        [single] => format!("{} Matrix Multiplication", single.calculator.name()),
        _ => "Matrix Multiplication".to_string(),
    }
}

/// Report for a zero-size request, where nothing is computed.
#[must_use]
pub fn empty_report() -> String {
    format!(
        "Matrix size 0 requested. No operations performed.\nDuration: {}\nEstimated memory: {}\n",
        format_duration(std::time::Duration::ZERO),
        format_bytes(0)
    )
}
