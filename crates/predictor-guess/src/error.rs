//! Error types for demographic lookups.
//!
//! Mapped to `DemographicsError` at the port boundary.

use thiserror::Error;

/// Result type alias for demographics client operations.
pub type GuessResult<T> = Result<T, GuessError>;

#[derive(Debug, Error)]
pub enum GuessError {
    /// Upstream answered with a non-success status.
    #[error("Guess API request failed with status {status}: {url}")]
    ApiRequestFailed { status: u16, url: String },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// An endpoint URL from configuration did not parse.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Response body was not the expected JSON.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
