//! HTTP implementation of the account gateway.

use async_trait::async_trait;
use secrecy::SecretString;

use super::client::{bearer, check_status, decode_json, ApiClient};
use super::dto::{Credentials, LoginResponse, UserEnvelope};
use crate::domain::session::{Session, UserProfile};
use crate::ports::{AccountGateway, ApiError, NewAccount};

pub const DEFAULT_LOGIN_FAILURE: &str = "Login failed. Please check your credentials.";

#[derive(Debug, Clone)]
pub struct HttpAccountApi {
    client: ApiClient,
}

impl HttpAccountApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AccountGateway for HttpAccountApi {
    async fn sign_up(&self, account: &NewAccount) -> Result<(), ApiError> {
        let request = self
            .client
            .http()
            .post(self.client.root_url("/users"))
            .json(&UserEnvelope { user: account });

        self.client.send_checked(request).await?;
        tracing::info!(email = %account.email, "Account created");
        Ok(())
    }

    async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let request = self
            .client
            .http()
            .post(self.client.root_url("/users/sign_in"))
            .json(&UserEnvelope {
                user: Credentials { email, password },
            });

        // A refused sign-in still carries a JSON body with the reason.
        let response = self.client.send(request).await?;
        let status = response.status();
        let body: LoginResponse = match decode_json(response).await {
            Ok(body) => body,
            Err(e) if status.is_success() => return Err(e),
            Err(_) if status.is_server_error() => {
                return Err(ApiError::status(status.as_u16(), ""));
            }
            Err(_) => return Err(ApiError::Unauthorized(DEFAULT_LOGIN_FAILURE.to_string())),
        };

        match (status.as_u16(), body.token) {
            (200, Some(token)) if !token.is_empty() => {
                let mut profile =
                    UserProfile::new(body.email.unwrap_or_else(|| email.to_string()), body.role);
                profile.name = body.name;
                Ok(Session::new(token, profile))
            }
            _ => Err(ApiError::Unauthorized(
                body.message.unwrap_or_else(|| DEFAULT_LOGIN_FAILURE.to_string()),
            )),
        }
    }

    async fn logout(&self, token: &SecretString) -> Result<(), ApiError> {
        let request = self
            .client
            .http()
            .delete(self.client.root_url("/users/sign_out"))
            .header("Content-Type", "application/json");

        let response = self.client.send(bearer(request, token)).await?;
        check_status(response).await?;
        Ok(())
    }
}
