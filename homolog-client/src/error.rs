//! Error types for the modeling service client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the modeling service
///
/// The client itself never retries; callers decide which of these are
/// transient. During polling every variant is treated as transient, since
/// the remote job keeps running independently of a failed status fetch.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network, timeout, or connection failure
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a status code the operation does not accept
    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body, surfaced as diagnostic context
        body: String,
    },

    /// A response body lacked an expected field or was not parseable
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl ClientError {
    /// Create an unexpected-status error from status code and body
    pub fn unexpected_status(status: u16, body: impl Into<String>) -> Self {
        Self::UnexpectedStatus {
            status,
            body: body.into(),
        }
    }

    /// Check if this error came from the transport layer
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::UnexpectedStatus { status, .. } if *status >= 500)
    }
}
