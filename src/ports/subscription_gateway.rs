//! Subscription Gateway Port - plan status and checkout.

use async_trait::async_trait;
use secrecy::SecretString;
use serde::{Deserialize, Deserializer, Serialize};

use super::ApiError;
use crate::domain::subscription::{CheckoutPlan, PlanType};

/// Body of the subscription status endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SubscriptionStatus {
    /// Unrecognised plan names decode as `None`.
    #[serde(default, deserialize_with = "deserialize_plan_lenient")]
    pub plan_type: Option<PlanType>,
    #[serde(default)]
    pub status: Option<String>,
}

fn deserialize_plan_lenient<'de, D>(deserializer: D) -> Result<Option<PlanType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(PlanType::parse))
}

/// Port for the subscription endpoints. All calls are authenticated.
#[async_trait]
pub trait SubscriptionGateway: Send + Sync {
    /// Current plan of the token's owner.
    ///
    /// # Errors
    /// A body carrying an `error` field is reported as `ApiError::Status`.
    async fn fetch_status(&self, token: &SecretString) -> Result<SubscriptionStatus, ApiError>;

    /// Start a hosted checkout for `plan`. Returns the checkout URL.
    async fn create_checkout(
        &self,
        token: &SecretString,
        plan: CheckoutPlan,
    ) -> Result<String, ApiError>;

    /// Confirm a completed checkout session. Returns the server's JSON as-is.
    async fn verify_checkout(
        &self,
        token: &SecretString,
        session_id: &str,
    ) -> Result<serde_json::Value, ApiError>;
}
