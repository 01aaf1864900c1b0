//! Session Store Port - small persisted key/value state on the client.

use async_trait::async_trait;

/// Keys under which client state is persisted.
pub mod keys {
    pub const TOKEN: &str = "token";
    pub const USER_DATA: &str = "userData";
    pub const MOVIE_LIST: &str = "movieList";
    pub const SUBSCRIPTION_STATUS: &str = "subscriptionStatus";
}

/// Errors that can occur reading or writing the store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Port for persisted string values. Writes are last-writer-wins.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError>;

    /// Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}
