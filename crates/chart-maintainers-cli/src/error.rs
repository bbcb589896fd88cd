//! Error types for the maintainers-check CLI

use chart_maintainers_core::DecodeError;
use thiserror::Error;

/// Errors that stop the CLI from producing a report
#[derive(Error, Debug)]
pub enum CliError {
    /// One input could not be loaded
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Several inputs could not be loaded
    #[error("{} inputs could not be loaded", .0.len())]
    Inputs(Vec<DecodeError>),

    /// The report could not be rendered
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CliError {
    /// Build from every input error collected during loading
    pub fn from_inputs(mut errors: Vec<DecodeError>) -> Self {
        if errors.len() == 1 {
            CliError::Decode(errors.remove(0))
        } else {
            CliError::Inputs(errors)
        }
    }

    /// The input errors behind this error, if any
    pub fn decode_errors(&self) -> Vec<&DecodeError> {
        match self {
            CliError::Decode(err) => vec![err],
            CliError::Inputs(errors) => errors.iter().collect(),
            CliError::Serialization(_) => Vec::new(),
        }
    }

    /// Whether at least one input file could not be read at all
    pub fn is_io(&self) -> bool {
        self.decode_errors().iter().any(|e| e.is_io())
    }

    /// Check if this is a user-facing error (vs internal)
    pub fn is_user_error(&self) -> bool {
        matches!(self, CliError::Decode(_) | CliError::Inputs(_))
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Serialization(format!("JSON error: {}", err))
    }
}

impl From<serde_yaml::Error> for CliError {
    fn from(err: serde_yaml::Error) -> Self {
        CliError::Serialization(format!("YAML error: {}", err))
    }
}

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
