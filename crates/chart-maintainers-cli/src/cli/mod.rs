//! CLI module for the maintainers-check tool
//!
//! Parses the command line, runs the check and maps the outcome to a
//! process exit code.

pub mod commands;
pub mod output;

pub use commands::CheckCli;
pub use output::{CheckOutput, OutputFormat, RenderOptions};

use chart_maintainers_core::ValidationReport;

use crate::error::CliError;

/// Exit codes for CLI operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The registry and the index agree
    Success = 0,
    /// At least one finding was reported
    FindingsReported = 1,
    /// An input could not be decoded
    InvalidInput = 3,
    /// An input file could not be read
    FileError = 4,
    /// Internal error
    InternalError = 10,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

impl ExitCode {
    /// Determine exit code from a validation report
    pub fn from_report(report: &ValidationReport) -> Self {
        if report.is_clean() {
            ExitCode::Success
        } else {
            ExitCode::FindingsReported
        }
    }

    /// Determine exit code from an error that stopped the run
    pub fn from_error(err: &CliError) -> Self {
        if !err.is_user_error() {
            ExitCode::InternalError
        } else if err.is_io() {
            ExitCode::FileError
        } else {
            ExitCode::InvalidInput
        }
    }
}

/// Run the CLI with the given arguments and return the exit code
pub fn run(cli: CheckCli) -> Result<ExitCode, CliError> {
    commands::execute_check(&cli)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chart_maintainers_core::{DecodeError, Finding};
    use std::path::PathBuf;

    fn report(findings: Vec<Finding>) -> ValidationReport {
        ValidationReport {
            findings,
            maintainers_checked: 0,
            charts_declared: 0,
            charts_maintained: 0,
            index_entries: 0,
        }
    }

    #[test]
    fn test_exit_code_conversion() {
        assert_eq!(i32::from(ExitCode::Success), 0);
        assert_eq!(i32::from(ExitCode::FindingsReported), 1);
        assert_eq!(i32::from(ExitCode::FileError), 4);
    }

    #[test]
    fn test_exit_code_from_report() {
        assert_eq!(ExitCode::from_report(&report(vec![])), ExitCode::Success);
        let findings = vec![Finding::EmptyIndex {
            index_path: "index.yaml".to_string(),
        }];
        assert_eq!(
            ExitCode::from_report(&report(findings)),
            ExitCode::FindingsReported
        );
    }

    #[test]
    fn test_exit_code_from_error() {
        let io = DecodeError::Io {
            document: "index file",
            path: PathBuf::from("index.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(ExitCode::from_error(&CliError::from(io)), ExitCode::FileError);

        let parse = DecodeError::Yaml {
            document: "index file",
            path: PathBuf::from("index.yaml"),
            source: serde_yaml::from_str::<Vec<String>>("a: b").unwrap_err(),
        };
        assert_eq!(ExitCode::from_error(&CliError::from(parse)), ExitCode::InvalidInput);

        let internal = CliError::Serialization("boom".to_string());
        assert_eq!(ExitCode::from_error(&internal), ExitCode::InternalError);
    }
}
