//! Errors from the remote API layer
//!
//! The taxonomy is deliberately flat: transport failure, non-2xx status,
//! an `{error}` payload from the backend, a body we cannot decode, or a
//! cancelled request. No error here is fatal; pages surface the message
//! in a dismissible banner and the user retries.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout)
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code
    #[error("API error ({status}): {body}")]
    Status {
        status: u16,
        /// Raw response body for the banner / logs
        body: String,
    },

    /// The API reported a failure in a well-formed payload
    #[error("{0}")]
    Api(String),

    /// The response body did not match the expected shape
    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The owning view was torn down before the response landed
    #[error("request cancelled")]
    Cancelled,

    #[error("invalid API base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}

impl ApiError {
    /// Whether this error came from the request being cancelled, as
    /// opposed to something worth showing the user.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ApiError::Cancelled)
    }
}
