//! HTTP implementation of the subscription gateway.

use async_trait::async_trait;
use secrecy::SecretString;
use serde_json::Value;

use super::client::{bearer, decode_json, ApiClient};
use super::dto::{embedded_error, extract_checkout_url, CheckoutRequest};
use crate::domain::subscription::CheckoutPlan;
use crate::ports::{ApiError, SubscriptionGateway, SubscriptionStatus};

#[derive(Debug, Clone)]
pub struct HttpSubscriptionApi {
    client: ApiClient,
}

impl HttpSubscriptionApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Sends the request and returns the JSON body, treating an embedded
    /// `error` field as a failure even on 2xx.
    async fn fetch_value(&self, request: reqwest::RequestBuilder) -> Result<Value, ApiError> {
        let response = self.client.send_checked(request).await?;
        let status = response.status().as_u16();
        let body: Value = decode_json(response).await?;
        if let Some(message) = embedded_error(&body) {
            return Err(ApiError::status(status, message));
        }
        Ok(body)
    }
}

#[async_trait]
impl SubscriptionGateway for HttpSubscriptionApi {
    async fn fetch_status(&self, token: &SecretString) -> Result<SubscriptionStatus, ApiError> {
        let request = self
            .client
            .http()
            .get(self.client.api_url("/subscriptions/status"))
            .header("Accept", "application/json");

        let body = self.fetch_value(bearer(request, token)).await?;
        serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn create_checkout(
        &self,
        token: &SecretString,
        plan: CheckoutPlan,
    ) -> Result<String, ApiError> {
        let request = self
            .client
            .http()
            .post(self.client.api_url("/subscriptions"))
            .json(&CheckoutRequest { plan_type: plan.id() });

        let body = self.fetch_value(bearer(request, token)).await?;
        let url = extract_checkout_url(&body)
            .ok_or_else(|| ApiError::Decode("No checkout URL returned from server.".to_string()))?;

        tracing::info!(plan = plan.id(), "Checkout session created");
        Ok(url)
    }

    async fn verify_checkout(
        &self,
        token: &SecretString,
        session_id: &str,
    ) -> Result<Value, ApiError> {
        let request = self
            .client
            .http()
            .get(self.client.api_url("/subscriptions/success"))
            .query(&[("session_id", session_id)]);

        self.fetch_value(bearer(request, token)).await
    }
}
