//! Error types for the client.

use thiserror::Error;

/// Errors returned by client operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The HTTP request could not be sent or the response could not be read.
    #[error("failed to communicate with the Gitea server: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("the Gitea server responded with status {status}: {body}")]
    Api {
        /// The HTTP status code of the response.
        status: u16,
        /// The response body, usually a JSON error message.
        body: String,
    },

    /// A response body could not be decoded as the expected JSON shape.
    #[error("failed to decode the server response: {0}")]
    Json(#[from] serde_json::Error),

    /// The client was constructed with invalid configuration.
    #[error("invalid client configuration: {0}")]
    Config(String),
}

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;
