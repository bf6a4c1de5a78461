//! Error types for API calls.

use thiserror::Error;

use crate::transport::HttpError;

/// Error type for API calls.
///
/// Error payloads returned by the API itself (`{"error": .., "errormsg": ..}`)
/// are not errors at this level; they come back as an [`super::ApiResponse`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP request failed before a response was received.
    #[error("Request to {url} failed: {source}")]
    Http {
        /// Endpoint URL without the query string
        url: String,
        /// Underlying transport error
        #[source]
        source: HttpError,
    },

    /// The API answered with an empty body.
    #[error("Bad response received from {url}: empty body")]
    EmptyResponse {
        /// Endpoint URL without the query string
        url: String,
    },

    /// The endpoint URL could not be built from the base URI and action.
    #[error("Invalid endpoint URL for action '{action}': {reason}")]
    InvalidUrl {
        /// API action (endpoint path)
        action: String,
        /// Reason for invalidity
        reason: String,
    },
}
