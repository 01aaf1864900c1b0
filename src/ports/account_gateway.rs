//! Account Gateway Port - sign up, sign in, sign out.

use async_trait::async_trait;
use secrecy::SecretString;
use serde::Serialize;

use super::ApiError;
use crate::domain::session::Session;

/// Registration payload, sent as `{"user": {...}}`.
#[derive(Debug, Clone, Serialize)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub password: String,
    pub mobile_number: String,
}

#[async_trait]
pub trait AccountGateway: Send + Sync {
    /// Register a new account.
    ///
    /// # Errors
    /// `ApiError::Status` whose message joins the server's `errors` list.
    async fn sign_up(&self, account: &NewAccount) -> Result<(), ApiError>;

    /// Exchange credentials for a session.
    ///
    /// # Errors
    /// `ApiError::Unauthorized` when the server answers without a token.
    async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError>;

    async fn logout(&self, token: &SecretString) -> Result<(), ApiError>;
}
