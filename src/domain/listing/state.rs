//! Incremental listing state.
//!
//! Pure state transitions for a paginated, filterable movie list. Nothing in
//! here performs I/O: every operation that needs the network returns a
//! [`FetchRequest`], and the caller later feeds the response back through
//! [`ListingState::apply_page`].
//!
//! # Epochs
//!
//! Changing the search text or genre starts a new [`FilterEpoch`]. The
//! accumulated items are cleared, the cursor goes back to page 1 and a fetch
//! for the new epoch is requested. Responses are tagged with the epoch that
//! requested them; a response whose epoch is no longer current is dropped
//! without touching any state, so a slow answer for an old filter can never
//! repopulate the list.

use std::collections::HashSet;

use serde::Serialize;

use super::{FilterEpoch, ListingPhase};
use crate::domain::catalog::{FilterState, ListingQuery, MovieSummary, Page, SortMode};
use crate::domain::foundation::{MovieId, StateMachine};

/// A fetch the caller must perform on behalf of the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub epoch: FilterEpoch,
    pub page: u32,
    pub query: ListingQuery,
}

/// Result of feeding a response back into the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The response belonged to the current epoch and was merged.
    Applied { added: usize, has_more: bool },
    /// The response belonged to an older epoch and was ignored.
    Stale,
}

/// Owned view of the listing for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingSnapshot {
    pub epoch: FilterEpoch,
    #[serde(skip)]
    pub filter: FilterState,
    pub items: Vec<MovieSummary>,
    pub page: u32,
    pub loading: bool,
    pub has_more: bool,
    pub total_count: u64,
}

impl ListingSnapshot {
    /// True once a fetch has settled with nothing to show.
    ///
    /// A failed fetch and an empty result look the same here.
    pub fn is_empty_result(&self) -> bool {
        !self.loading && self.items.is_empty()
    }
}

/// State of one incremental listing.
#[derive(Debug, Clone)]
pub struct ListingState {
    filter: FilterState,
    epoch: FilterEpoch,
    items: Vec<MovieSummary>,
    seen: HashSet<MovieId>,
    page: u32,
    phase: ListingPhase,
    has_more: bool,
    total_count: u64,
}

impl ListingState {
    /// Creates an unloaded listing. Call [`refresh`](Self::refresh) to issue
    /// the first fetch.
    pub fn new(filter: FilterState) -> Self {
        Self {
            filter,
            epoch: FilterEpoch::initial(),
            items: Vec::new(),
            seen: HashSet::new(),
            page: 1,
            phase: ListingPhase::Idle,
            has_more: false,
            total_count: 0,
        }
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn epoch(&self) -> FilterEpoch {
        self.epoch
    }

    pub fn items(&self) -> &[MovieSummary] {
        &self.items
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn phase(&self) -> ListingPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == ListingPhase::Loading
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// True when a scroll-triggered continuation would issue a fetch.
    pub fn can_load_more(&self) -> bool {
        self.phase == ListingPhase::Idle && self.has_more
    }

    /// Starts a new epoch for the current filter and requests page 1.
    pub fn refresh(&mut self) -> FetchRequest {
        self.epoch = self.epoch.next();
        self.page = 1;
        self.items.clear();
        self.seen.clear();
        self.has_more = true;
        self.total_count = 0;
        // Any fetch still in flight now belongs to an old epoch.
        self.phase = ListingPhase::Loading;

        FetchRequest {
            epoch: self.epoch,
            page: self.page,
            query: self.filter.query(),
        }
    }

    /// Updates the search text. Returns a fetch when the trimmed text changed.
    pub fn set_search_text(&mut self, text: impl Into<String>) -> Option<FetchRequest> {
        let text = text.into();
        let changed = text.trim() != self.filter.search_text.trim();
        self.filter.search_text = text;
        changed.then(|| self.refresh())
    }

    /// Drops the search text, returning the listing to genre browsing.
    pub fn clear_search(&mut self) -> Option<FetchRequest> {
        self.set_search_text(String::new())
    }

    /// Updates the genre. Returns a fetch when the genre changed.
    pub fn set_genre(&mut self, genre: impl Into<String>) -> Option<FetchRequest> {
        let genre = genre.into();
        if genre == self.filter.genre {
            return None;
        }
        self.filter.genre = genre;
        Some(self.refresh())
    }

    /// Re-sorts the accumulated items client-side. Never requests a fetch and
    /// never changes the epoch. Returns true if the mode changed.
    pub fn set_sort_mode(&mut self, mode: SortMode) -> bool {
        if mode == self.filter.sort_mode {
            return false;
        }
        self.filter.sort_mode = mode;
        mode.apply(&mut self.items);
        true
    }

    /// Advances the cursor for a scroll-triggered continuation.
    ///
    /// Returns `None` (and changes nothing) while a fetch is in flight or
    /// when the server reported no further pages.
    pub fn next_page_request(&mut self) -> Option<FetchRequest> {
        if !self.has_more {
            return None;
        }
        let phase = self.phase.transition_to(ListingPhase::Loading).ok()?;
        self.phase = phase;
        self.page += 1;

        Some(FetchRequest {
            epoch: self.epoch,
            page: self.page,
            query: self.filter.query(),
        })
    }

    /// Merges a response into the listing.
    ///
    /// Page 1 replaces the items; later pages are appended after dropping ids
    /// already present. Incoming movies are sorted by the current sort mode
    /// before merging.
    pub fn apply_page(&mut self, request: &FetchRequest, page: Page) -> MergeOutcome {
        if request.epoch != self.epoch || request.page != self.page {
            return MergeOutcome::Stale;
        }
        match self.phase.transition_to(ListingPhase::Idle) {
            Ok(phase) => self.phase = phase,
            Err(_) => return MergeOutcome::Stale,
        }

        let Page { mut movies, pagination } = page;
        self.filter.sort_mode.apply(&mut movies);

        if request.page == 1 {
            self.items.clear();
            self.seen.clear();
        }

        let before = self.items.len();
        for movie in movies {
            if self.seen.insert(movie.id) {
                self.items.push(movie);
            }
        }

        self.has_more = pagination.has_more_after(request.page);
        self.total_count = pagination.total_count;

        MergeOutcome::Applied {
            added: self.items.len() - before,
            has_more: self.has_more,
        }
    }

    /// Removes a movie from the accumulated items (after a delete, say).
    pub fn remove(&mut self, id: MovieId) -> bool {
        let before = self.items.len();
        self.items.retain(|m| m.id != id);
        self.seen.remove(&id);
        self.items.len() != before
    }

    pub fn snapshot(&self) -> ListingSnapshot {
        ListingSnapshot {
            epoch: self.epoch,
            filter: self.filter.clone(),
            items: self.items.clone(),
            page: self.page,
            loading: self.is_loading(),
            has_more: self.has_more,
            total_count: self.total_count,
        }
    }
}

impl Default for ListingState {
    fn default() -> Self {
        Self::new(FilterState::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Pagination;
    use proptest::prelude::*;

    fn movie(id: i64) -> MovieSummary {
        MovieSummary::new(id, format!("Movie {}", id), "Action")
            .with_rating(5.0)
            .with_release_year(2000)
    }

    fn page_of(ids: std::ops::RangeInclusive<i64>, current: u32, total_pages: u32) -> Page {
        let movies: Vec<_> = ids.map(movie).collect();
        Page {
            pagination: Pagination {
                current_page: current,
                total_pages,
                total_count: 15,
                per_page: 10,
            },
            movies,
        }
    }

    fn ids(state: &ListingState) -> Vec<i64> {
        state.items().iter().map(|m| m.id.value()).collect()
    }

    fn action_listing() -> ListingState {
        ListingState::new(FilterState::new("Action", SortMode::TopRated))
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Filter changes
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn new_listing_is_idle_and_unloaded() {
        let state = action_listing();
        assert_eq!(state.phase(), ListingPhase::Idle);
        assert!(!state.can_load_more());
        assert!(state.items().is_empty());
    }

    #[test]
    fn genre_change_resets_to_page_one_of_new_epoch() {
        let mut state = action_listing();
        let first = state.refresh();
        state.apply_page(&first, page_of(1..=10, 1, 2));
        let second = state.next_page_request().unwrap();
        assert_eq!(second.page, 2);

        let request = state.set_genre("Drama").unwrap();

        assert_eq!(request.page, 1);
        assert_eq!(request.epoch, first.epoch.next());
        assert_eq!(request.query, ListingQuery::ByGenre("Drama".into()));
        assert!(state.items().is_empty());
        assert!(state.is_loading());
        assert!(state.has_more());
    }

    #[test]
    fn unchanged_filter_values_do_not_refetch() {
        let mut state = action_listing();
        assert!(state.set_genre("Action").is_none());
        assert!(state.set_search_text("").is_none());

        state.set_search_text("Heat").unwrap();
        assert!(state.set_search_text(" Heat ").is_none());
    }

    #[test]
    fn search_text_queries_by_title() {
        let mut state = action_listing();
        let request = state.set_search_text("Inception").unwrap();
        assert_eq!(request.query, ListingQuery::ByTitle("Inception".into()));
        assert_eq!(request.page, 1);
    }

    #[test]
    fn clear_search_returns_to_genre_browsing() {
        let mut state = action_listing();
        state.set_search_text("Inception").unwrap();
        let request = state.clear_search().unwrap();
        assert_eq!(request.query, ListingQuery::ByGenre("Action".into()));
        assert!(state.items().is_empty());
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Merging
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn two_pages_accumulate_until_last_page() {
        let mut state = action_listing();
        let first = state.refresh();
        let outcome = state.apply_page(&first, page_of(1..=10, 1, 2));
        assert_eq!(outcome, MergeOutcome::Applied { added: 10, has_more: true });

        let second = state.next_page_request().unwrap();
        let outcome = state.apply_page(&second, page_of(11..=15, 2, 2));
        assert_eq!(outcome, MergeOutcome::Applied { added: 5, has_more: false });

        assert_eq!(state.items().len(), 15);
        assert!(!state.has_more());
        assert!(!state.is_loading());
    }

    #[test]
    fn duplicate_ids_across_pages_are_dropped() {
        let mut state = action_listing();
        let first = state.refresh();
        state.apply_page(&first, page_of(1..=10, 1, 2));
        let second = state.next_page_request().unwrap();
        let outcome = state.apply_page(&second, page_of(8..=12, 2, 2));

        assert_eq!(outcome, MergeOutcome::Applied { added: 2, has_more: false });
        assert_eq!(ids(&state), (1..=12).collect::<Vec<_>>());
    }

    #[test]
    fn stale_response_is_discarded_without_mutation() {
        let mut state = action_listing();
        let drama = state.set_genre("Drama").unwrap();
        let scifi = state.set_genre("Sci-Fi").unwrap();

        let outcome = state.apply_page(&drama, page_of(1..=10, 1, 3));
        assert_eq!(outcome, MergeOutcome::Stale);
        assert!(state.items().is_empty());
        assert!(state.is_loading());

        let outcome = state.apply_page(&scifi, page_of(20..=22, 1, 1));
        assert_eq!(outcome, MergeOutcome::Applied { added: 3, has_more: false });
        assert_eq!(ids(&state), vec![20, 21, 22]);
    }

    #[test]
    fn next_page_is_noop_while_loading_or_exhausted() {
        let mut state = action_listing();
        let first = state.refresh();
        assert!(state.next_page_request().is_none());
        assert_eq!(state.page(), 1);

        state.apply_page(&first, page_of(1..=3, 1, 1));
        let before = state.snapshot();
        assert!(state.next_page_request().is_none());
        assert_eq!(state.snapshot(), before);
    }

    #[test]
    fn failed_fetch_ends_pagination() {
        let mut state = action_listing();
        let first = state.refresh();
        state.apply_page(&first, page_of(1..=10, 1, 5));
        let second = state.next_page_request().unwrap();
        state.apply_page(&second, Page::empty(2));

        assert!(!state.has_more());
        assert!(!state.is_loading());
        assert_eq!(state.items().len(), 10);
    }

    #[test]
    fn incoming_page_is_sorted_by_current_mode() {
        let mut state = action_listing();
        let request = state.refresh();
        let page = Page {
            movies: vec![
                movie(1).with_rating(4.0),
                movie(2).with_rating(9.0),
                movie(3).with_rating(6.5),
            ],
            pagination: Pagination::single(1, 3),
        };
        state.apply_page(&request, page);
        assert_eq!(ids(&state), vec![2, 3, 1]);
    }

    #[test]
    fn sort_change_resorts_without_new_epoch() {
        let mut state = action_listing();
        let request = state.refresh();
        let page = Page {
            movies: vec![
                movie(1).with_rating(9.0).with_release_year(1990),
                movie(2).with_rating(7.0).with_release_year(2015),
                movie(3).with_rating(8.0).with_release_year(2005),
            ],
            pagination: Pagination::single(1, 3),
        };
        state.apply_page(&request, page);
        let epoch = state.epoch();

        assert!(state.set_sort_mode(SortMode::LatestByYear));
        assert_eq!(ids(&state), vec![2, 3, 1]);
        assert_eq!(state.epoch(), epoch);
        assert!(!state.is_loading());
        assert!(!state.set_sort_mode(SortMode::LatestByYear));
    }

    #[test]
    fn remove_drops_item_and_allows_it_back() {
        let mut state = action_listing();
        let request = state.refresh();
        state.apply_page(&request, page_of(1..=3, 1, 1));
        assert!(state.remove(MovieId::new(2)));
        assert!(!state.remove(MovieId::new(2)));
        assert_eq!(ids(&state), vec![1, 3]);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Properties
    // ════════════════════════════════════════════════════════════════════════════

    fn arb_page() -> impl Strategy<Value = Vec<i64>> {
        prop::collection::vec(0i64..40, 0..12)
    }

    proptest! {
        #[test]
        fn merged_pages_never_contain_duplicate_ids(pages in prop::collection::vec(arb_page(), 1..6)) {
            let mut state = action_listing();
            let total_pages = pages.len() as u32;
            let mut request = Some(state.refresh());

            for (index, page_ids) in pages.iter().enumerate() {
                let Some(req) = request.take() else { break };
                let page = Page {
                    movies: page_ids.iter().copied().map(movie).collect(),
                    pagination: Pagination {
                        current_page: index as u32 + 1,
                        total_pages,
                        total_count: 0,
                        per_page: 10,
                    },
                };
                state.apply_page(&req, page);
                request = state.next_page_request();
            }

            let mut seen = HashSet::new();
            for item in state.items() {
                prop_assert!(seen.insert(item.id));
            }
        }

        #[test]
        fn stale_epochs_never_leak_into_new_epoch(old_ids in arb_page(), new_ids in arb_page()) {
            let mut state = action_listing();
            let old = state.set_genre("Drama").unwrap();
            let new = state.set_genre("Sci-Fi").unwrap();

            let new_page = Page {
                movies: new_ids.iter().map(|id| movie(id + 1000)).collect(),
                pagination: Pagination::single(1, new_ids.len() as u64),
            };
            state.apply_page(&new, new_page);
            let old_page = Page {
                movies: old_ids.iter().copied().map(movie).collect(),
                pagination: Pagination::single(1, old_ids.len() as u64),
            };
            prop_assert_eq!(state.apply_page(&old, old_page), MergeOutcome::Stale);
            prop_assert!(state.items().iter().all(|m| m.id.value() >= 1000));
        }
    }
}
