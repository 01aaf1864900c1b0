//! AccountService - sign up, sign in and sign out.

use std::sync::Arc;

use super::errors::AccountError;
use super::session_context::SessionContext;
use super::subscription_status::SubscriptionStatusProvider;
use crate::domain::forms::{LoginForm, SignupForm};
use crate::domain::session::UserProfile;
use crate::ports::{AccountGateway, ApiError, NewAccount};

pub const DEFAULT_SIGNUP_FAILURE: &str = "Signup failed. Please try again.";
pub const DEFAULT_LOGOUT_FAILURE: &str = "Logout failed.";

/// Account flows. Forms are validated locally and never sent when invalid.
pub struct AccountService {
    gateway: Arc<dyn AccountGateway>,
    session: Arc<SessionContext>,
    subscription: Arc<SubscriptionStatusProvider>,
}

impl AccountService {
    pub fn new(
        gateway: Arc<dyn AccountGateway>,
        session: Arc<SessionContext>,
        subscription: Arc<SubscriptionStatusProvider>,
    ) -> Self {
        Self {
            gateway,
            session,
            subscription,
        }
    }

    /// Signs in, starts the session and refetches the plan.
    pub async fn login(&self, form: &LoginForm) -> Result<UserProfile, AccountError> {
        form.validate()?;

        let session = self
            .gateway
            .login(&form.email, &form.password)
            .await
            .map_err(|e| match e {
                ApiError::Unauthorized(message) => AccountError::Rejected(message),
                other => AccountError::Api(other),
            })?;

        let profile = session.profile.clone();
        self.session.begin(session).await?;
        self.subscription.refresh_status().await;

        tracing::info!(email = %profile.email, "Signed in");
        Ok(profile)
    }

    /// Registers a new account. Does not sign in.
    pub async fn sign_up(&self, form: &SignupForm) -> Result<(), AccountError> {
        form.validate()?;

        let account = NewAccount {
            name: form.full_name.trim().to_string(),
            email: form.email.clone(),
            password: form.password.clone(),
            mobile_number: form.mobile_number.clone(),
        };

        self.gateway.sign_up(&account).await.map_err(|e| match e {
            ApiError::Status { message, .. } | ApiError::Unauthorized(message) => {
                if message.is_empty() {
                    AccountError::Rejected(DEFAULT_SIGNUP_FAILURE.to_string())
                } else {
                    AccountError::Rejected(message)
                }
            }
            other => AccountError::Api(other),
        })
    }

    /// Signs out. The local session ends and the plan resets even when the
    /// server call or the store fails; a storage failure is reported first.
    pub async fn logout(&self) -> Result<(), AccountError> {
        let token = self.session.require_token()?;
        let server_result = self.gateway.logout(&token).await;

        let cleared = self.session.end().await;
        self.subscription.refresh_status().await;
        cleared?;

        match server_result {
            Ok(()) => {
                tracing::info!("Signed out");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Server sign-out failed, local session cleared");
                Err(match e {
                    ApiError::Status { message, .. } if message.is_empty() => {
                        AccountError::Rejected(DEFAULT_LOGOUT_FAILURE.to_string())
                    }
                    ApiError::Status { message, .. } => AccountError::Rejected(message),
                    other => AccountError::Api(other),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemorySessionStore, RecordingNotifier};
    use crate::domain::foundation::AuthError;
    use crate::domain::session::{Session, UserRole};
    use crate::domain::subscription::{CheckoutPlan, PlanType};
    use crate::ports::{keys, SessionStore, StorageError, SubscriptionGateway, SubscriptionStatus};
    use async_trait::async_trait;
    use secrecy::{ExposeSecret, SecretString};
    use serde_json::Value;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    // ════════════════════════════════════════════════════════════════════════════
    // Mock Implementations
    // ════════════════════════════════════════════════════════════════════════════

    #[derive(Default)]
    struct MockAccounts {
        reject_login: Option<String>,
        signup_error: Option<ApiError>,
        logout_error: Option<ApiError>,
        calls: Mutex<Vec<String>>,
    }

    impl MockAccounts {
        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl AccountGateway for MockAccounts {
        async fn sign_up(&self, account: &NewAccount) -> Result<(), ApiError> {
            self.calls.lock().unwrap().push(format!("sign_up:{}", account.email));
            match &self.signup_error {
                Some(e) => Err(e.clone()),
                None => Ok(()),
            }
        }

        async fn login(&self, email: &str, _password: &str) -> Result<Session, ApiError> {
            self.calls.lock().unwrap().push(format!("login:{}", email));
            match &self.reject_login {
                Some(message) => Err(ApiError::Unauthorized(message.clone())),
                None => Ok(Session::new(
                    "tok-login",
                    UserProfile::new(email, UserRole::Supervisor),
                )),
            }
        }

        async fn logout(&self, token: &SecretString) -> Result<(), ApiError> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("logout:{}", token.expose_secret()));
            match &self.logout_error {
                Some(e) => Err(e.clone()),
                None => Ok(()),
            }
        }
    }

    struct PremiumGateway;

    #[async_trait]
    impl SubscriptionGateway for PremiumGateway {
        async fn fetch_status(&self, _token: &SecretString) -> Result<SubscriptionStatus, ApiError> {
            Ok(SubscriptionStatus {
                plan_type: Some(PlanType::Premium),
                status: None,
            })
        }

        async fn create_checkout(
            &self,
            _token: &SecretString,
            _plan: CheckoutPlan,
        ) -> Result<String, ApiError> {
            unimplemented!()
        }

        async fn verify_checkout(
            &self,
            _token: &SecretString,
            _session_id: &str,
        ) -> Result<Value, ApiError> {
            unimplemented!()
        }
    }

    /// Store that can be told to refuse removals.
    #[derive(Default)]
    struct LockedStore {
        inner: InMemorySessionStore,
        refuse_removal: AtomicBool,
    }

    #[async_trait]
    impl SessionStore for LockedStore {
        async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.get(key).await
        }

        async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
            self.inner.set(key, value).await
        }

        async fn remove(&self, key: &str) -> Result<(), StorageError> {
            if self.refuse_removal.load(Ordering::SeqCst) {
                return Err(std::io::Error::new(std::io::ErrorKind::Other, "read-only").into());
            }
            self.inner.remove(key).await
        }
    }

    struct Fixture {
        service: AccountService,
        accounts: Arc<MockAccounts>,
        session: Arc<SessionContext>,
        subscription: Arc<SubscriptionStatusProvider>,
        store: Arc<dyn SessionStore>,
    }

    fn fixture(accounts: MockAccounts) -> Fixture {
        fixture_with_store(accounts, Arc::new(InMemorySessionStore::new()))
    }

    fn fixture_with_store(accounts: MockAccounts, store: Arc<dyn SessionStore>) -> Fixture {
        let accounts = Arc::new(accounts);
        let session = Arc::new(SessionContext::new(store.clone()));
        let subscription = Arc::new(SubscriptionStatusProvider::new(
            Arc::new(PremiumGateway),
            session.clone(),
            store.clone(),
            Arc::new(RecordingNotifier::new()),
        ));
        Fixture {
            service: AccountService::new(accounts.clone(), session.clone(), subscription.clone()),
            accounts,
            session,
            subscription,
            store,
        }
    }

    fn signup_form() -> SignupForm {
        SignupForm {
            full_name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            password: "Engine#1".into(),
            confirm_password: "Engine#1".into(),
            mobile_number: "5551234567".into(),
            agreed_to_terms: true,
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Login / Logout
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn login_starts_session_and_loads_plan() {
        let f = fixture(MockAccounts::default());
        let profile = f
            .service
            .login(&LoginForm::new("ana@example.com", "secret1"))
            .await
            .unwrap();

        assert_eq!(profile.role, UserRole::Supervisor);
        assert_eq!(f.session.require_token().unwrap().expose_secret(), "tok-login");
        assert_eq!(f.subscription.plan_type(), Some(PlanType::Premium));
    }

    #[tokio::test]
    async fn invalid_login_form_never_reaches_gateway() {
        let f = fixture(MockAccounts::default());
        let err = f
            .service
            .login(&LoginForm::new("ana@example.com", "123"))
            .await
            .unwrap_err();

        assert!(matches!(err, AccountError::Validation(_)));
        assert!(f.accounts.calls().is_empty());
    }

    #[tokio::test]
    async fn refused_login_surfaces_server_message() {
        let f = fixture(MockAccounts {
            reject_login: Some("Invalid email or password".into()),
            ..Default::default()
        });
        let err = f
            .service
            .login(&LoginForm::new("ana@example.com", "secret1"))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Invalid email or password");
        assert!(!f.session.is_authenticated());
    }

    #[tokio::test]
    async fn logout_without_session_fails_before_request() {
        let f = fixture(MockAccounts::default());
        let err = f.service.logout().await.unwrap_err();
        assert!(matches!(err, AccountError::Auth(AuthError::MissingToken)));
        assert!(f.accounts.calls().is_empty());
    }

    #[tokio::test]
    async fn logout_clears_session_and_resets_plan() {
        let f = fixture(MockAccounts::default());
        f.service
            .login(&LoginForm::new("ana@example.com", "secret1"))
            .await
            .unwrap();

        f.service.logout().await.unwrap();

        assert_eq!(f.accounts.calls().last().map(String::as_str), Some("logout:tok-login"));
        assert!(!f.session.is_authenticated());
        assert_eq!(f.subscription.plan_type(), None);
        assert_eq!(f.store.get(keys::TOKEN).await.unwrap(), None);
    }

    #[tokio::test]
    async fn failed_server_logout_still_clears_local_session() {
        let f = fixture(MockAccounts {
            logout_error: Some(ApiError::status(500, "")),
            ..Default::default()
        });
        f.service
            .login(&LoginForm::new("ana@example.com", "secret1"))
            .await
            .unwrap();

        let err = f.service.logout().await.unwrap_err();
        assert_eq!(err.to_string(), DEFAULT_LOGOUT_FAILURE);
        assert!(!f.session.is_authenticated());
    }

    #[tokio::test]
    async fn logout_resets_plan_even_when_store_fails() {
        let store = Arc::new(LockedStore::default());
        let f = fixture_with_store(MockAccounts::default(), store.clone());
        f.service
            .login(&LoginForm::new("ana@example.com", "secret1"))
            .await
            .unwrap();
        assert_eq!(f.subscription.plan_type(), Some(PlanType::Premium));

        store.refuse_removal.store(true, Ordering::SeqCst);
        let err = f.service.logout().await.unwrap_err();

        assert!(matches!(err, AccountError::Storage(_)));
        assert!(!f.session.is_authenticated());
        assert_eq!(f.subscription.plan_type(), None);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Sign up
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn sign_up_sends_trimmed_name() {
        let f = fixture(MockAccounts::default());
        f.service.sign_up(&signup_form()).await.unwrap();
        assert_eq!(f.accounts.calls(), vec!["sign_up:ada@example.com".to_string()]);
        assert!(!f.session.is_authenticated());
    }

    #[tokio::test]
    async fn sign_up_rejection_uses_server_errors() {
        let f = fixture(MockAccounts {
            signup_error: Some(ApiError::status(422, "Email has already been taken")),
            ..Default::default()
        });
        let err = f.service.sign_up(&signup_form()).await.unwrap_err();
        assert_eq!(err.to_string(), "Email has already been taken");

        let f = fixture(MockAccounts {
            signup_error: Some(ApiError::status(422, "")),
            ..Default::default()
        });
        let err = f.service.sign_up(&signup_form()).await.unwrap_err();
        assert_eq!(err.to_string(), DEFAULT_SIGNUP_FAILURE);
    }

    #[tokio::test]
    async fn invalid_signup_never_reaches_gateway() {
        let f = fixture(MockAccounts::default());
        let form = SignupForm {
            agreed_to_terms: false,
            ..signup_form()
        };
        assert!(matches!(
            f.service.sign_up(&form).await,
            Err(AccountError::Validation(_))
        ));
        assert!(f.accounts.calls().is_empty());
    }
}
