//! Authentication errors for the domain layer.
//!
//! These describe what went wrong from the client's point of view, not the
//! server's. A missing token is detected locally, before any request is made.

use thiserror::Error;

/// Authentication errors raised by session-aware operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No session is active, so no bearer token can be attached.
    #[error("No authentication token found")]
    MissingToken,

    /// The server rejected the supplied credentials.
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// The token was rejected by the server (expired or revoked).
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The signed-in user lacks the role required for this action.
    #[error("Insufficient permissions")]
    InsufficientPermissions,
}

impl AuthError {
    /// Returns true if this error indicates the user should sign in again.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(self, AuthError::MissingToken | AuthError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_token_message_is_user_facing() {
        assert_eq!(
            AuthError::MissingToken.to_string(),
            "No authentication token found"
        );
    }

    #[test]
    fn reauthentication_required_for_token_problems_only() {
        assert!(AuthError::MissingToken.requires_reauthentication());
        assert!(AuthError::InvalidToken.requires_reauthentication());
        assert!(!AuthError::InsufficientPermissions.requires_reauthentication());
        assert!(!AuthError::InvalidCredentials("bad".into()).requires_reauthentication());
    }
}
