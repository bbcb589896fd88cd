//! Chart Maintainers CLI
//!
//! Command-line front end for [`chart_maintainers_core`]. Loads the
//! maintainers registry and the chart index, reports every inconsistency on
//! standard output, and exits non-zero when anything was found.
//!
//! ## Usage
//!
//! ```bash
//! # Check ./maintainers.yaml against ./charts/index.yaml
//! maintainers-check
//!
//! # Explicit paths, plus the assets directory check
//! maintainers-check --maintainers maintainers.yaml --index charts/index.yaml --assets charts/assets
//!
//! # Machine-readable report
//! maintainers-check --format json
//! ```

pub mod cli;
pub mod error;

pub use cli::{CheckCli, CheckOutput, ExitCode, OutputFormat, RenderOptions};
pub use error::CliError;

/// Run the CLI application
///
/// Input errors are printed to standard error, one line each, before the
/// exit code is chosen.
///
/// # Example
///
/// ```rust,no_run
/// use clap::Parser;
/// use chart_maintainers_cli::{run_cli, CheckCli};
///
/// fn main() {
///     let cli = CheckCli::parse();
///     let exit_code = run_cli(cli);
///     std::process::exit(exit_code.into());
/// }
/// ```
pub fn run_cli(cli: CheckCli) -> ExitCode {
    match cli::run(cli) {
        Ok(code) => code,
        Err(e) => {
            let decode_errors = e.decode_errors();
            if decode_errors.is_empty() {
                eprintln!("error: {}", e);
            }
            for err in decode_errors {
                eprintln!("error: {}", err);
            }
            ExitCode::from_error(&e)
        }
    }
}
