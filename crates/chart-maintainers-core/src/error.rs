//! Error types for loading maintainer registries and chart indexes
//!
//! Consistency problems are never errors; they are reported as
//! [`Finding`](crate::engine::Finding) values. Errors here only cover input
//! that could not be read or decoded.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to read or decode an input document
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The file could not be read
    #[error("failed to read {} [{}]: {source}", .document, .path.display())]
    Io {
        document: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The content is not YAML of the expected shape
    #[error("failed to decode {} [{}]: {source}", .document, .path.display())]
    Yaml {
        document: &'static str,
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The content is not JSON of the expected shape
    #[error("failed to decode {} [{}]: {source}", .document, .path.display())]
    Json {
        document: &'static str,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The assets directory could not be listed
    #[error("failed to list assets directory [{}]: {source}", .path.display())]
    AssetsDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DecodeError {
    /// Path of the input that failed
    pub fn path(&self) -> &PathBuf {
        match self {
            DecodeError::Io { path, .. }
            | DecodeError::Yaml { path, .. }
            | DecodeError::Json { path, .. }
            | DecodeError::AssetsDir { path, .. } => path,
        }
    }

    /// Whether the input could not be read at all (as opposed to malformed)
    pub fn is_io(&self) -> bool {
        matches!(self, DecodeError::Io { .. } | DecodeError::AssetsDir { .. })
    }
}

/// Result type alias for loader operations
pub type Result<T> = std::result::Result<T, DecodeError>;
