//! Command-line definition and the check command

use chart_maintainers_core::loader::{DEFAULT_INDEX_PATH, DEFAULT_MAINTAINERS_PATH};
use chart_maintainers_core::{
    load_asset_names, load_index, load_maintainers, DecodeError, ValidationContext, Validator,
};
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info};

use super::output::{CheckOutput, OutputFormat, RenderOptions};
use super::ExitCode;
use crate::error::{CliError, Result};

/// Chart maintainers consistency check
///
/// Cross-validates a maintainers registry against a chart index and reports
/// every inconsistency found in one pass.
#[derive(Parser, Debug)]
#[command(name = "maintainers-check")]
#[command(about = "Check a maintainers registry against a chart index", long_about = None)]
#[command(version)]
pub struct CheckCli {
    /// Path to the maintainers registry
    #[arg(short, long, env = "MAINTAINERS_FILE", default_value = DEFAULT_MAINTAINERS_PATH)]
    pub maintainers: PathBuf,

    /// Path to the chart index
    #[arg(short, long, env = "CHART_INDEX_FILE", default_value = DEFAULT_INDEX_PATH)]
    pub index: PathBuf,

    /// Chart assets directory; each sub-directory must be a maintained chart
    #[arg(short, long, env = "CHART_ASSETS_DIR")]
    pub assets: Option<PathBuf>,

    /// Output format for the report
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Output verbosity level (-v, -vv); -v also prints suggested fixes
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print findings only, without the summary line
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,
}

/// Load every input, validate, render, and pick the exit code
///
/// All inputs are loaded before giving up so a single run reports every
/// unreadable or malformed file.
pub fn execute_check(cli: &CheckCli) -> Result<ExitCode> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let mut errors: Vec<DecodeError> = Vec::new();

    let maintainers = load_maintainers(&cli.maintainers)
        .map_err(|e| report_input_error(e, &mut errors))
        .ok();
    let index = load_index(&cli.index)
        .map_err(|e| report_input_error(e, &mut errors))
        .ok();
    let assets = match &cli.assets {
        Some(dir) => load_asset_names(dir)
            .map_err(|e| report_input_error(e, &mut errors))
            .ok(),
        None => None,
    };

    let (Some(maintainers), Some(index)) = (maintainers, index) else {
        return Err(CliError::from_inputs(errors));
    };
    if !errors.is_empty() {
        return Err(CliError::from_inputs(errors));
    }

    let mut context = ValidationContext::new()
        .with_maintainers_path(cli.maintainers.display().to_string())
        .with_index_path(cli.index.display().to_string());
    if let Some(assets) = assets {
        context = context.with_assets(assets);
    }

    let report = Validator::new(context).validate(&maintainers, &index);
    info!(findings = report.findings.len(), "check finished");

    let options = RenderOptions {
        quiet: cli.quiet,
        show_fixes: cli.verbose > 0,
    };
    CheckOutput::from_report(&report).render(cli.format, options)?;

    Ok(ExitCode::from_report(&report))
}

fn report_input_error(err: DecodeError, errors: &mut Vec<DecodeError>) {
    debug!(path = %err.path().display(), "input could not be loaded");
    errors.push(err);
}
