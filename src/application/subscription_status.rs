//! SubscriptionStatusProvider - the caller's plan tier and checkout flow.

use serde_json::Value;
use std::sync::{Arc, Mutex, MutexGuard};

use super::errors::SubscriptionError;
use super::session_context::SessionContext;
use crate::domain::catalog::MovieSummary;
use crate::domain::foundation::ValidationError;
use crate::domain::subscription::{self, CheckoutPlan, PlanType};
use crate::ports::{keys, ApiError, Notification, Notifier, SessionStore, SubscriptionGateway};

pub const STATUS_FAILURE_MESSAGE: &str = "Failed to fetch subscription status";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubscriptionState {
    /// `None` until known; treated as basic for gating.
    pub plan_type: Option<PlanType>,
    pub loading: bool,
    loaded: bool,
}

/// Holds the plan tier for the current session.
///
/// The plan is fetched at most once per session through
/// [`ensure_loaded`](Self::ensure_loaded); sign-in and sign-out call
/// [`refresh_status`](Self::refresh_status) to refetch or reset it.
pub struct SubscriptionStatusProvider {
    gateway: Arc<dyn SubscriptionGateway>,
    session: Arc<SessionContext>,
    store: Arc<dyn SessionStore>,
    notifier: Arc<dyn Notifier>,
    state: Mutex<SubscriptionState>,
}

impl SubscriptionStatusProvider {
    pub fn new(
        gateway: Arc<dyn SubscriptionGateway>,
        session: Arc<SessionContext>,
        store: Arc<dyn SessionStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            gateway,
            session,
            store,
            notifier,
            state: Mutex::new(SubscriptionState::default()),
        }
    }

    fn state(&self) -> MutexGuard<'_, SubscriptionState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn snapshot(&self) -> SubscriptionState {
        *self.state()
    }

    pub fn plan_type(&self) -> Option<PlanType> {
        self.state().plan_type
    }

    pub fn is_loading(&self) -> bool {
        self.state().loading
    }

    /// True when `movie` must be shown locked for the current plan.
    pub fn is_locked(&self, movie: &MovieSummary) -> bool {
        subscription::is_locked(movie, self.plan_type())
    }

    /// Fetches the plan unless it was already fetched this session.
    pub async fn ensure_loaded(&self) -> Option<PlanType> {
        {
            let state = self.state();
            if state.loaded {
                return state.plan_type;
            }
        }
        self.refresh_status().await
    }

    /// Refetches the plan. Without a session the plan resets to `None`
    /// without touching the network.
    ///
    /// A failed fetch leaves the plan `None` and emits one error notification.
    pub async fn refresh_status(&self) -> Option<PlanType> {
        let Some(token) = self.session.token() else {
            *self.state() = SubscriptionState {
                plan_type: None,
                loading: false,
                loaded: true,
            };
            self.forget_persisted().await;
            return None;
        };

        self.state().loading = true;
        let result = self.gateway.fetch_status(&token).await;

        let plan_type = match result {
            Ok(status) => {
                tracing::debug!(plan = ?status.plan_type, "Subscription status fetched");
                match status.plan_type {
                    Some(plan) => self.persist(plan).await,
                    None => self.forget_persisted().await,
                }
                status.plan_type
            }
            Err(e) => {
                tracing::warn!(error = %e, "Subscription status fetch failed");
                let message = match &e {
                    ApiError::Status { message, .. } | ApiError::Unauthorized(message)
                        if !message.is_empty() =>
                    {
                        message.clone()
                    }
                    _ => STATUS_FAILURE_MESSAGE.to_string(),
                };
                self.notifier.notify(Notification::error(message));
                None
            }
        };

        *self.state() = SubscriptionState {
            plan_type,
            loading: false,
            loaded: true,
        };
        plan_type
    }

    /// Starts a hosted checkout and returns the URL to send the user to.
    pub async fn create_checkout(&self, plan: CheckoutPlan) -> Result<String, SubscriptionError> {
        let token = self.session.require_token()?;
        let url = self.gateway.create_checkout(&token, plan).await?;
        Ok(url)
    }

    /// Confirms a completed checkout and refetches the plan.
    pub async fn verify_checkout(&self, session_id: &str) -> Result<Value, SubscriptionError> {
        let session_id = session_id.trim();
        if session_id.is_empty() {
            return Err(ValidationError::rule("session_id", "No session ID found in the URL.").into());
        }
        let token = self.session.require_token()?;
        let body = self.gateway.verify_checkout(&token, session_id).await?;
        self.refresh_status().await;
        Ok(body)
    }

    async fn persist(&self, plan: PlanType) {
        if let Err(e) = self
            .store
            .set(keys::SUBSCRIPTION_STATUS, plan.as_str().to_string())
            .await
        {
            tracing::warn!(error = %e, "Could not persist subscription status");
        }
    }

    async fn forget_persisted(&self) {
        if let Err(e) = self.store.remove(keys::SUBSCRIPTION_STATUS).await {
            tracing::warn!(error = %e, "Could not clear subscription status");
        }
    }
}
