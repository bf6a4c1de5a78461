//! Transport failures.

use thiserror::Error;

/// Failure to get a response from the API server.
///
/// API-level failures (an `error` field in the body) are not transport
/// errors; they arrive as ordinary responses.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The server could not be reached (DNS, refused connection, TLS).
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    #[error("Request timed out")]
    Timeout,

    /// The response body could not be read to the end.
    #[error("Failed to read response body: {0}")]
    Body(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The HTTP library rejected the URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
