//! Error types for the events backend client

use thiserror::Error;

/// Errors that can occur when talking to the events backend
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The HTTP request never produced a response (DNS, connect, timeout)
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The response body could not be parsed
    #[error("Response parsing failed: {0}")]
    ParseFailed(String),

    /// The backend answered with a non-2xx status.
    ///
    /// `message` is the human-readable `message` field from the JSON error
    /// body, when the backend supplied one. Callers surface it verbatim and
    /// fall back to their own generic string when it is `None`.
    #[error("Server rejected request (status {status})")]
    Rejected {
        /// HTTP status code
        status: u16,
        /// `message` field from the error body, if present and parseable
        message: Option<String>,
    },
}

impl ApiError {
    /// The rejection message to show the user, if the server provided one.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected {
                message: Some(message),
                ..
            } => Some(message),
            _ => None,
        }
    }
}
