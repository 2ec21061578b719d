//! Application configuration from CLI flags and environment.

use clap::Parser;

use matcalc_core::constants::DEFAULT_PRINT_LIMIT;
use matcalc_core::memory_budget::parse_memory_limit;
use matcalc_core::{MatError, Options};

/// MatCalc-rs: square integer matrix multiplication (naive, blocked, Strassen).
#[derive(Parser, Debug)]
#[command(name = "matcalc", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Matrix size N. Prompted on stdin when omitted.
    #[arg(short = 'n', long, env = "MATCALC_SIZE", allow_negative_numbers = true)]
    pub size: Option<i64>,

    /// Algorithm to use: naive, strassen, blocked, or all.
    #[arg(long, default_value = "all")]
    pub algo: String,

    /// Strassen crossover size (0 = default).
    #[arg(long, default_value = "0", env = "MATCALC_THRESHOLD")]
    pub threshold: usize,

    /// Tile edge for blocked multiplication (0 = default).
    #[arg(long, default_value = "0")]
    pub block_size: usize,

    /// Seed for the random operands.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print matrices up to this size.
    #[arg(long, default_value_t = DEFAULT_PRINT_LIMIT)]
    pub print_limit: usize,

    /// Memory limit (e.g., "8G", "512M").
    #[arg(long, default_value = "")]
    pub memory_limit: String,

    /// Quiet mode (only output the product).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output and debug logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Print a JSON report instead of text.
    #[arg(long)]
    pub json: bool,

    /// Write the product to this file, one row per line.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Multiplication options derived from the flags.
    pub fn options(&self) -> Result<Options, MatError> {
        Ok(Options {
            strassen_threshold: self.threshold,
            block_size: self.block_size,
            memory_limit: parse_memory_limit(&self.memory_limit)?,
        }
        .normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("matcalc").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let config = parse(&[]);
        assert_eq!(config.algo, "all");
        assert_eq!(config.print_limit, DEFAULT_PRINT_LIMIT);
        assert!(config.seed.is_none());
        assert_eq!(config.options().unwrap(), Options::default());
    }

    #[test]
    fn negative_size_parses() {
        let config = parse(&["-n", "-3"]);
        assert_eq!(config.size, Some(-3));
    }

    #[test]
    fn options_from_flags() {
        let config = parse(&[
            "--size",
            "8",
            "--threshold",
            "2",
            "--block-size",
            "4",
            "--memory-limit",
            "1K",
        ]);
        let opts = config.options().unwrap();
        assert_eq!(opts.strassen_threshold, 2);
        assert_eq!(opts.block_size, 4);
        assert_eq!(opts.memory_limit(), Some(1024));
    }

    #[test]
    fn bad_memory_limit_is_config_error() {
        let config = parse(&["--memory-limit", "lots"]);
        assert!(matches!(config.options(), Err(MatError::Config(_))));
    }

    #[test]
    fn command_is_well_formed() {
        <AppConfig as clap::CommandFactory>::command().debug_assert();
    }
}
