//! Common error types for photoalbums

use thiserror::Error;

/// Common result type for photoalbums operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a dataset build.
///
/// Per-record validation problems are not errors; they are logged and the
/// record is dropped (see [`crate::mapping`]).
#[derive(Error, Debug)]
pub enum Error {
    /// Upstream text was not a JSON array
    #[error("Invalid json received")]
    MalformedPayload {
        /// The offending payload, verbatim
        json: String,
    },

    /// Transport-level failure talking to the upstream service
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// Upstream answered with a non-success status
    #[error("Upstream {url} returned status {status}")]
    UpstreamStatus { url: String, status: u16 },

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Fetch(err.to_string())
    }
}
