//! SessionContext - the signed-in user, held explicitly and persisted.

use secrecy::{ExposeSecret, SecretString};
use std::sync::{Arc, RwLock};

use crate::domain::foundation::AuthError;
use crate::domain::session::{PersistedUserData, Session, UserProfile};
use crate::ports::{keys, SessionStore, StorageError};

/// Current session plus its persisted copy.
///
/// Every authenticated call asks this object for a token first, so a missing
/// token fails before any request is built.
pub struct SessionContext {
    store: Arc<dyn SessionStore>,
    current: RwLock<Option<Session>>,
}

impl SessionContext {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self {
            store,
            current: RwLock::new(None),
        }
    }

    /// Loads a previously persisted session, if any.
    ///
    /// A `userData` entry that no longer parses is treated as signed out.
    pub async fn restore(&self) -> Result<Option<UserProfile>, StorageError> {
        let Some(raw) = self.store.get(keys::USER_DATA).await? else {
            return Ok(None);
        };

        let data: PersistedUserData = match serde_json::from_str(&raw) {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring unreadable persisted user data");
                return Ok(None);
            }
        };

        let session = Session::from_persisted(data);
        let profile = session.profile.clone();
        *self.current.write().unwrap_or_else(|e| e.into_inner()) = Some(session);
        tracing::debug!(email = %profile.email, "Session restored");
        Ok(Some(profile))
    }

    /// Starts a session after sign-in and persists it.
    pub async fn begin(&self, session: Session) -> Result<(), StorageError> {
        let persisted = session.to_persisted();
        self.store
            .set(keys::TOKEN, session.token().expose_secret().clone())
            .await?;
        self.store
            .set(keys::USER_DATA, serde_json::to_string(&persisted)?)
            .await?;

        tracing::info!(email = %session.profile.email, role = ?session.profile.role, "Session started");
        *self.current.write().unwrap_or_else(|e| e.into_inner()) = Some(session);
        Ok(())
    }

    /// Ends the session and removes the persisted token and user data.
    ///
    /// Both keys are removed even if one removal fails; the first failure is
    /// returned.
    pub async fn end(&self) -> Result<(), StorageError> {
        self.current
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .take();

        let user_data = self.store.remove(keys::USER_DATA).await;
        let token = self.store.remove(keys::TOKEN).await;
        for result in [&user_data, &token] {
            if let Err(e) = result {
                tracing::warn!(error = %e, "Failed to clear persisted session");
            }
        }
        tracing::info!("Session ended");
        user_data.and(token)
    }

    pub fn token(&self) -> Option<SecretString> {
        self.current
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .as_ref()
            .map(|s| SecretString::new(s.token().expose_secret().clone()))
    }

    /// The bearer token, or `AuthError::MissingToken`.
    pub fn require_token(&self) -> Result<SecretString, AuthError> {
        self.token().ok_or(AuthError::MissingToken)
    }

    pub fn profile(&self) -> Option<UserProfile> {
        self.current
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .as_ref()
            .map(|s| s.profile.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.current
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }
}
