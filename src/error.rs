//! Error definitions shared across the CLI.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can surface from a command invocation.
///
/// Everything propagates uncaught to `main`, which renders the message via the
/// output formatter and exits non-zero. Nothing is retried or recovered.
#[derive(Debug, Error)]
pub enum CliError {
    /// Application-level failure reported in the response envelope.
    /// Displays exactly the service-provided message.
    #[error("{0}")]
    Api(String),

    /// Transport failure from the HTTP layer (network error, non-2xx status,
    /// unparseable response body).
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Missing or unusable local configuration.
    #[error("{0}")]
    Config(String),

    /// The config file exists but does not parse.
    #[error("config file {} is not valid JSON: {source}", path.display())]
    CorruptConfig {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// I/O failure on the config file or its directory.
    #[error("config file {}: {source}", path.display())]
    ConfigIo {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Malformed JSON passed as a structured argument.
    #[error("invalid JSON in {flag}: {source}")]
    InvalidJson {
        flag: &'static str,
        source: serde_json::Error,
    },

    /// A flag value that cannot be forwarded to the API.
    #[error("{0}")]
    InvalidArgument(String),

    /// Serialization failure while rendering output.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
