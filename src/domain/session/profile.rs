//! Signed-in user and the bearer session that carries their token.

use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Role granted by the account service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// May create, edit and delete catalogue entries.
    Supervisor,
    /// Regular viewer. Unknown roles fall back to this.
    #[default]
    #[serde(other)]
    User,
}

impl UserRole {
    pub fn can_manage_catalog(&self) -> bool {
        matches!(self, UserRole::Supervisor)
    }
}

/// Profile details returned at sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub role: UserRole,
}

impl UserProfile {
    pub fn new(email: impl Into<String>, role: UserRole) -> Self {
        Self {
            name: None,
            email: email.into(),
            role,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns the user's name, or email as fallback.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

/// An authenticated session: bearer token plus the profile it belongs to.
#[derive(Debug, Clone)]
pub struct Session {
    token: SecretString,
    pub profile: UserProfile,
    pub started_at: DateTime<Utc>,
}

impl Session {
    pub fn new(token: impl Into<String>, profile: UserProfile) -> Self {
        Self {
            token: SecretString::new(token.into()),
            profile,
            started_at: Utc::now(),
        }
    }

    pub fn token(&self) -> &SecretString {
        &self.token
    }

    /// Rebuilds a session from persisted client state.
    pub fn from_persisted(data: PersistedUserData) -> Self {
        let PersistedUserData {
            name,
            email,
            role,
            token,
            started_at,
        } = data;
        Self {
            token: SecretString::new(token),
            profile: UserProfile { name, email, role },
            started_at: started_at.unwrap_or_else(Utc::now),
        }
    }

    pub fn to_persisted(&self) -> PersistedUserData {
        PersistedUserData {
            name: self.profile.name.clone(),
            email: self.profile.email.clone(),
            role: self.profile.role,
            token: self.token.expose_secret().clone(),
            started_at: Some(self.started_at),
        }
    }
}

/// Shape of the `userData` entry in the client store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedUserData {
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub role: UserRole,
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
}
