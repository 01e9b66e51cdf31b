//! Defines application-specific error types.
//!
//! `Error` is the top-level type returned by the library's pipeline stages.
//! Per-item failures (an unreadable file, a failed inference call, a copy that
//! could not be performed) are *not* represented here: they are absorbed into
//! records and reports as data. Only setup failures and cancellation surface
//! as an `Error`.

use std::path::Path;
use thiserror::Error;

/// A specialized `Result` type for `dirsort` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level errors used throughout `dirsort`.
#[derive(Error, Debug)]
pub enum Error {
    /// Error occurring during file or directory access (read, write, metadata).
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration settings or combinations.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A collaborator call failed in a way that cannot be absorbed per item.
    #[error(transparent)]
    Inference(#[from] InferenceError),

    /// The operation was cancelled by the user (e.g., Ctrl+C).
    #[error("Operation cancelled by user (Ctrl+C)")]
    Interrupted,

    /// The input path contained no files to organize.
    #[error("No files found to organize.")]
    NoFilesFound,

    /// Catch-all for errors raised by glue code.
    #[error(transparent)]
    Generic(#[from] anyhow::Error),
}

/// Errors raised while building or validating a `Config`.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An option was given a value outside its accepted range.
    #[error("Invalid value for {option}: {reason}")]
    InvalidValue {
        /// The offending option, as spelled on the command line.
        option: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// Two options that cannot be combined were both given.
    #[error("Conflicting options: {option1} cannot be used with {option2}")]
    Conflict {
        /// The first option.
        option1: String,
        /// The second option.
        option2: String,
    },

    /// An option requires another option that was not given.
    #[error("Option {option} requires {required}")]
    MissingDependency {
        /// The option that was given.
        option: String,
        /// The option it depends on.
        required: String,
    },

    /// The input path does not exist or cannot be resolved.
    #[error("Failed to resolve input path '{path}': {source}")]
    PathResolution {
        /// The path as given by the user.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Errors reported by inference collaborators.
///
/// The metadata generator treats every variant except `Cancelled` as a
/// recoverable per-step failure.
#[derive(Error, Debug)]
pub enum InferenceError {
    /// The session was cancelled before or during the call.
    #[error("Inference cancelled")]
    Cancelled,

    /// The provider needs an API key that is not set in the environment.
    #[error("Missing API key: set the {0} environment variable")]
    MissingApiKey(String),

    /// The HTTP request failed or returned a non-success status.
    #[error("Inference request failed: {0}")]
    Http(String),

    /// The provider answered, but the answer contained no text.
    #[error("Inference returned an empty response")]
    EmptyResponse,

    /// The selected provider cannot serve this kind of request.
    #[error("Provider '{0}' does not support this request")]
    UnsupportedProvider(String),
}

/// Creates an `Error::Io` with path context.
///
/// # Arguments
/// * `source` - The original `std::io::Error`.
/// * `path` - The path associated with the error.
pub fn io_error_with_path<P: AsRef<Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}
