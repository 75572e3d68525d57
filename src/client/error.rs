//! Client error types

use thiserror::Error;

/// Result type alias for vector store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when talking to the vector-index service
#[derive(Error, Debug)]
pub enum Error {
    /// Request struct could not be serialized to JSON
    #[error("Encoding error: {0}")]
    Encoding(#[from] serde_json::Error),

    /// Request could not be constructed (malformed endpoint URL)
    #[error("Request error: {0}")]
    Request(String),

    /// Network or connection failure, including body-read failures
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body is not valid JSON for the expected shape
    #[error("Decoding error: {message}")]
    Decoding {
        /// What went wrong while decoding
        message: String,
        /// The raw body that failed to decode
        body: String,
    },

    /// Service answered with a non-2xx status
    #[error("API error ({status}): {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Raw response body from the server
        body: String,
    },

    /// Invalid client configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = Error::Api {
            status: 503,
            body: "{\"message\":\"unavailable\"}".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "API error (503): {\"message\":\"unavailable\"}"
        );
    }

    #[test]
    fn test_decoding_error_keeps_body() {
        let err = Error::Decoding {
            message: "expected value".to_string(),
            body: "not json".to_string(),
        };
        match err {
            Error::Decoding { body, .. } => assert_eq!(body, "not json"),
            _ => panic!("wrong variant"),
        }
    }
}
