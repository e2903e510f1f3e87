/// Errors from the PokeAPI client layer.
use thiserror::Error;

/// Typed errors from one lookup against the API.
///
/// All variants except `Client` are per-identifier: in batch mode they are
/// rendered inline and do not stop the remaining lookups.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The underlying HTTP client could not be constructed.
    #[error("Could not construct the HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request never produced a response (DNS, connect, timeout).
    #[error("Request to '{url}' failed: {source}")]
    Request {
        /// The endpoint that was requested.
        url: String,
        /// The underlying transport error.
        source: reqwest::Error,
    },

    /// The API answered with a non-success status (404 for unknown names).
    #[error("'{url}' returned HTTP {status}")]
    Status {
        /// The endpoint that was requested.
        url: String,
        /// The response status code.
        status: reqwest::StatusCode,
    },

    /// The response body did not match the expected record shape.
    #[error("Unexpected response body from '{url}': {source}")]
    Decode {
        /// The endpoint that was requested.
        url: String,
        /// The underlying deserialization error.
        source: serde_json::Error,
    },
}
