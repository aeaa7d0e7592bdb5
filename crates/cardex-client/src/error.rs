//! Error types for catalog client operations.

use thiserror::Error;

/// Errors that can occur during client–catalog communication.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The server returned an unexpected status code.
    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus {
        /// HTTP status code received.
        status: u16,
        /// Server-supplied message, or the status text when none was found.
        body: String,
    },
    /// The response body could not be parsed.
    #[error("failed to parse response: {0}")]
    Parse(String),
    /// Both the primary and the legacy download endpoint failed.
    #[error("download failed on both endpoints (primary: {primary}; legacy: {legacy})")]
    BothEndpointsFailed {
        /// Failure reason from the primary endpoint.
        primary: String,
        /// Failure reason from the legacy endpoint.
        legacy: String,
    },
}
