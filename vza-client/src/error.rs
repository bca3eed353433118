/// Error types for backend fetches
use thiserror::Error;

/// The one error kind a failed refresh surfaces.
///
/// Every variant renders to a short displayable message; stores hand that
/// message to the presentation layer while keeping their last good data.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport failure: DNS, TLS, connect, timeout
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The gateway answered with a non-success status
    #[error("Server returned {status} for {table}")]
    Status {
        table: String,
        status: reqwest::StatusCode,
    },

    /// The row batch did not decode; one bad row fails the whole batch
    #[error("Failed to decode rows from {table}: {source}")]
    Decode {
        table: String,
        #[source]
        source: serde_json::Error,
    },

    /// Unusable connection settings
    #[error("Invalid client configuration: {0}")]
    Config(String),
}

/// Type alias for Results using FetchError
pub type Result<T> = std::result::Result<T, FetchError>;
