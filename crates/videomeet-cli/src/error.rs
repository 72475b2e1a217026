//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;
use videomeet_core::MeetingError;

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or is invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// A file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON could not be parsed or produced.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A time argument could not be parsed.
    #[error("invalid time `{value}`: {reason}")]
    InvalidTime { value: String, reason: String },

    /// Error from the meeting model.
    #[error(transparent)]
    Meeting(#[from] MeetingError),
}
