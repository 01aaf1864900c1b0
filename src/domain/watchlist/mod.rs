//! Watch list domain module.
//!
//! The user's personal "My List": a small ordered set of movies kept on the
//! client, unique by id.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::MovieSummary;
use crate::domain::foundation::MovieId;

/// One saved movie. Field names match the persisted `movieList` entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchListEntry {
    pub id: MovieId,
    pub title: String,
    #[serde(default)]
    pub poster_url: Option<String>,
}

impl From<&MovieSummary> for WatchListEntry {
    fn from(movie: &MovieSummary) -> Self {
        Self {
            id: movie.id,
            title: movie.title.clone(),
            poster_url: movie.poster_url.clone(),
        }
    }
}

/// Ordered list of saved movies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WatchList {
    entries: Vec<WatchListEntry>,
}

impl WatchList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from stored entries, keeping the first of any duplicates.
    pub fn from_entries(entries: Vec<WatchListEntry>) -> Self {
        let mut list = Self::new();
        for entry in entries {
            list.add(entry);
        }
        list
    }

    pub fn contains(&self, id: MovieId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Appends the entry unless its id is already present.
    pub fn add(&mut self, entry: WatchListEntry) -> bool {
        if self.contains(entry.id) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    pub fn remove(&mut self, id: MovieId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        before != self.entries.len()
    }

    pub fn entries(&self) -> &[WatchListEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
