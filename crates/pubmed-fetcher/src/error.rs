//! Error types for the E-utilities client.
//!
//! Uses `thiserror` for structured error handling with automatic `From`
//! implementations. Client errors are recoverable by design: the pipeline
//! logs them and degrades to empty results.

/// Errors from the HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, body decode, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server error (5xx response)
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },

    /// Unexpected HTTP status
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },
}

impl ClientError {
    /// Create a server error.
    #[must_use]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server { status, message: message.into() }
    }

    /// Create an unexpected-status error.
    #[must_use]
    pub fn unexpected_status(status: u16, message: impl Into<String>) -> Self {
        Self::UnexpectedStatus { status, message: message.into() }
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
