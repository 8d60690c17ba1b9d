//! Error types for O3 API operations.

/// Errors that can occur when interacting with the O3 API.
#[derive(Debug, thiserror::Error)]
pub enum O3Error {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The response body could not be decoded.
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// The API answered with a non-success code.
    #[error("O3 API error ({code}): {message}")]
    Api {
        /// HTTP status or the `code` field of the response body.
        code: i64,
        /// Response body or a description of the failure.
        message: String,
    },

    /// An unknown network name was given.
    #[error("unknown network '{0}', expected main, test or private")]
    InvalidNetwork(String),

    /// No async runtime could be created for a blocking call.
    #[error("runtime error: {0}")]
    Runtime(String),
}
