//! Error type shared by every remote API port.

use thiserror::Error;

/// Failure talking to the catalogue, subscription or account API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Connection refused, DNS failure, reset mid-body.
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out")]
    Timeout,

    /// Non-success status. `message` is the server's `error`/`message` body
    /// field when present.
    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    /// Body was not the expected JSON shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// 401, or a sign-in the server refused.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

impl ApiError {
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        ApiError::Status {
            status,
            message: message.into(),
        }
    }

    /// Whether repeating the same request later could succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            ApiError::Network(_) | ApiError::Timeout => true,
            ApiError::Status { status, .. } => *status == 429 || *status >= 500,
            ApiError::Decode(_) | ApiError::Unauthorized(_) => false,
        }
    }

    /// Message suitable for a user-facing notification.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { message, .. } | ApiError::Unauthorized(message)
                if !message.is_empty() =>
            {
                message.clone()
            }
            ApiError::Timeout => "The server took too long to respond.".to_string(),
            ApiError::Network(_) => "Could not reach the server.".to_string(),
            _ => "Something went wrong. Please try again.".to_string(),
        }
    }
}
