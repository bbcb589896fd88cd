//! maintainers-check
//!
//! Cross-validates a chart repository's maintainers registry against its
//! chart index.
//!
//! # Exit Codes
//!
//! - 0: No issues found
//! - 1: One or more issues reported
//! - 3: An input file could not be decoded
//! - 4: An input file could not be read
//! - 10: Internal error

use chart_maintainers_cli::{run_cli, CheckCli};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = CheckCli::parse();

    // RUST_LOG, when set, replaces the verbosity-derived level
    let level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let exit_code = run_cli(cli);
    std::process::exit(exit_code.into());
}
