//! Error types for heavyword-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while building or querying a frequency summary.
#[derive(Error, Debug)]
pub enum SummaryError {
    /// A caller-supplied parameter is invalid (empty locator, k < 1).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The underlying text source could not be opened or read.
    #[error("source unavailable: {locator}")]
    SourceUnavailable {
        /// The locator of the source that failed.
        locator: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A post-run query was made before a successful `run`.
    #[error("summary not ready: run() has not completed")]
    NotReady,
}

/// Result type alias using [`SummaryError`].
pub type SummaryResult<T> = Result<T, SummaryError>;
