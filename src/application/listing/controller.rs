//! ListingController - drives a [`ListingState`] against a movie source.
//!
//! State sits behind a `std::sync::Mutex` that is only held for the pure
//! transitions; fetches run outside the lock and re-enter it to merge. Stale
//! responses are dropped by the epoch check in `ListingState::apply_page`, not
//! by cancelling the fetch.

use std::sync::{Arc, Mutex, MutexGuard};
use tokio::task::JoinHandle;

use super::debouncer::SearchTarget;
use crate::domain::catalog::{FilterState, SortMode};
use crate::domain::foundation::MovieId;
use crate::domain::listing::{FetchRequest, ListingSnapshot, ListingState, MergeOutcome};
use crate::ports::MovieQueryService;

struct ListingInner {
    query: Arc<dyn MovieQueryService>,
    state: Mutex<ListingState>,
}

/// Handle to one incremental listing. Clones share the same state.
#[derive(Clone)]
pub struct ListingController {
    inner: Arc<ListingInner>,
}

impl ListingController {
    /// Creates an unloaded listing; call [`refresh`](Self::refresh) to load
    /// page 1.
    pub fn new(query: Arc<dyn MovieQueryService>, filter: FilterState) -> Self {
        Self {
            inner: Arc::new(ListingInner {
                query,
                state: Mutex::new(ListingState::new(filter)),
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, ListingState> {
        self.inner.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn snapshot(&self) -> ListingSnapshot {
        self.state().snapshot()
    }

    /// Starts a new epoch for the current filter and loads page 1.
    pub async fn refresh(&self) -> MergeOutcome {
        let request = self.state().refresh();
        self.execute(request).await
    }

    /// Applies settled search text. `None` when the text did not change.
    pub async fn set_search_text(&self, text: impl Into<String>) -> Option<MergeOutcome> {
        let request = self.state().set_search_text(text)?;
        Some(self.execute(request).await)
    }

    /// Switches genre. `None` when the genre did not change.
    pub async fn set_genre(&self, genre: impl Into<String>) -> Option<MergeOutcome> {
        let request = self.state().set_genre(genre)?;
        Some(self.execute(request).await)
    }

    /// Re-sorts accumulated items locally. Never fetches.
    pub fn set_sort_mode(&self, mode: SortMode) -> bool {
        self.state().set_sort_mode(mode)
    }

    /// Loads the next page of the current epoch. `None` while a fetch is in
    /// flight or when no pages remain.
    pub async fn load_next_page(&self) -> Option<MergeOutcome> {
        let request = self.state().next_page_request()?;
        Some(self.execute(request).await)
    }

    /// Scroll-sentinel callback. Claims the next page synchronously so a
    /// burst of visibility events issues one fetch, then loads it in the
    /// background.
    pub fn on_sentinel_visible(&self) -> Option<JoinHandle<MergeOutcome>> {
        let request = self.state().next_page_request()?;
        Some(self.spawn(request))
    }

    /// Drops a movie from the accumulated items, e.g. after it was deleted.
    pub fn remove_item(&self, id: MovieId) -> bool {
        self.state().remove(id)
    }

    fn spawn(&self, request: FetchRequest) -> JoinHandle<MergeOutcome> {
        let this = self.clone();
        tokio::spawn(async move { this.execute(request).await })
    }

    async fn execute(&self, request: FetchRequest) -> MergeOutcome {
        tracing::debug!(
            epoch = %request.epoch,
            page = request.page,
            query = ?request.query,
            "Fetching listing page"
        );
        let page = self.inner.query.fetch(&request.query, request.page).await;
        let outcome = self.state().apply_page(&request, page);

        match outcome {
            MergeOutcome::Applied { added, has_more } => {
                tracing::debug!(epoch = %request.epoch, page = request.page, added, has_more, "Listing page merged");
            }
            MergeOutcome::Stale => {
                tracing::trace!(epoch = %request.epoch, page = request.page, "Discarded stale listing page");
            }
        }
        outcome
    }
}

/// Both calls take the new epoch before returning, so any fetch still in
/// flight is already stale; only the fetch itself runs in the background.
impl SearchTarget for ListingController {
    fn clear_results(&self) {
        if let Some(request) = self.state().clear_search() {
            self.spawn(request);
        }
    }

    fn start_search(&self, query: String) {
        if let Some(request) = self.state().set_search_text(query) {
            self.spawn(request);
        }
    }
}
