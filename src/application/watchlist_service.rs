//! WatchListService - the persisted "My List".

use std::sync::Arc;
use tokio::sync::Mutex;

use super::errors::WatchListError;
use super::subscription_status::SubscriptionStatusProvider;
use crate::domain::catalog::MovieSummary;
use crate::domain::foundation::MovieId;
use crate::domain::watchlist::{WatchList, WatchListEntry};
use crate::ports::{keys, SessionStore, StorageError};

/// Loads lazily from the session store and writes back after every change.
pub struct WatchListService {
    store: Arc<dyn SessionStore>,
    subscription: Arc<SubscriptionStatusProvider>,
    list: Mutex<Option<WatchList>>,
}

impl WatchListService {
    pub fn new(store: Arc<dyn SessionStore>, subscription: Arc<SubscriptionStatusProvider>) -> Self {
        Self {
            store,
            subscription,
            list: Mutex::new(None),
        }
    }

    async fn load(&self) -> Result<WatchList, WatchListError> {
        let Some(raw) = self.store.get(keys::MOVIE_LIST).await? else {
            return Ok(WatchList::new());
        };
        match serde_json::from_str::<Vec<WatchListEntry>>(&raw) {
            Ok(entries) => Ok(WatchList::from_entries(entries)),
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring unreadable watch list");
                Ok(WatchList::new())
            }
        }
    }

    pub async fn entries(&self) -> Result<Vec<WatchListEntry>, WatchListError> {
        let mut guard = self.list.lock().await;
        if guard.is_none() {
            *guard = Some(self.load().await?);
        }
        Ok(guard
            .as_ref()
            .map(|list| list.entries().to_vec())
            .unwrap_or_default())
    }

    pub async fn contains(&self, id: MovieId) -> Result<bool, WatchListError> {
        Ok(self.entries().await?.iter().any(|e| e.id == id))
    }

    /// Adds `movie` unless it is locked for the current plan. Returns whether
    /// the list changed.
    pub async fn add(&self, movie: &MovieSummary) -> Result<bool, WatchListError> {
        if self.subscription.is_locked(movie) {
            return Err(WatchListError::PremiumRequired);
        }
        self.update(|list| list.add(WatchListEntry::from(movie))).await
    }

    pub async fn remove(&self, id: MovieId) -> Result<bool, WatchListError> {
        self.update(|list| list.remove(id)).await
    }

    async fn update<F>(&self, change: F) -> Result<bool, WatchListError>
    where
        F: FnOnce(&mut WatchList) -> bool,
    {
        let mut guard = self.list.lock().await;
        let current = match guard.take() {
            Some(list) => list,
            None => self.load().await?,
        };

        // The cache only moves forward once the store has the new list.
        let mut list = current.clone();
        let changed = change(&mut list);
        if changed {
            let persisted = match serde_json::to_string(&list) {
                Ok(json) => self.store.set(keys::MOVIE_LIST, json).await,
                Err(e) => Err(StorageError::from(e)),
            };
            if let Err(e) = persisted {
                tracing::warn!(error = %e, "Failed to persist watch list");
                *guard = Some(current);
                return Err(e.into());
            }
        }
        *guard = Some(list);
        Ok(changed)
    }
}
