//! Console error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by dataset loading and score computation.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// A status score was requested for an empty module collection.
    #[error("cannot compute a status score over an empty module collection")]
    EmptyModules,

    /// Dataset file could not be read.
    #[error("failed to read dataset {}", path.display())]
    DatasetIo {
        /// Path that failed to read.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Dataset file extension maps to no known parser.
    #[error("unsupported dataset format: {} (expected .yaml, .yml, or .json)", path.display())]
    UnsupportedFormat {
        /// Path with the unrecognized extension.
        path: PathBuf,
    },

    /// YAML dataset failed to parse.
    #[error("invalid YAML dataset")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON dataset failed to parse.
    #[error("invalid JSON dataset")]
    Json(#[from] serde_json::Error),
}

impl ConsoleError {
    /// Get a stable error code for this error type.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyModules => "EMPTY_MODULES",
            Self::DatasetIo { .. } => "DATASET_IO",
            Self::UnsupportedFormat { .. } => "UNSUPPORTED_FORMAT",
            Self::Yaml(_) => "INVALID_YAML",
            Self::Json(_) => "INVALID_JSON",
        }
    }
}
