//! MatCalc-rs: square integer matrix multiplication.

use tracing_subscriber::EnvFilter;

use matcalc_cli::ui;
use matcalc_lib::{app, config, errors};

fn main() {
    let config = config::AppConfig::parse();

    // Initialize tracing on stderr so stdout stays clean for reports
    let default_level = if config.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    if let Err(err) = app::run(&config) {
        ui::print_error(&format!("{err:#}"));
        std::process::exit(errors::exit_code(&err));
    }
}
