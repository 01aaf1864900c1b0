//! Presentation projection of a listing snapshot.

use serde::Serialize;

use crate::domain::catalog::MovieSummary;
use crate::domain::listing::ListingSnapshot;
use crate::domain::subscription::{is_locked, PlanType};

/// Items shown in the "continue watching" strip.
pub const CONTINUE_WATCHING_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieCard {
    pub movie: MovieSummary,
    /// Premium movie the current plan cannot play.
    pub locked: bool,
}

/// What a list screen renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingView {
    pub cards: Vec<MovieCard>,
    pub continue_watching: Vec<MovieCard>,
    pub empty_message: Option<String>,
    pub loading: bool,
    pub has_more: bool,
    pub total_count: u64,
}

impl ListingView {
    /// Projects `snapshot` for `plan`. Search-dependent parts follow the
    /// snapshot's own search text.
    pub fn build(snapshot: &ListingSnapshot, plan: Option<PlanType>) -> Self {
        let search = snapshot.filter.search_text.trim();
        let cards: Vec<MovieCard> = snapshot
            .items
            .iter()
            .map(|movie| MovieCard {
                movie: movie.clone(),
                locked: is_locked(movie, plan),
            })
            .collect();

        let continue_watching = if search.is_empty() {
            cards.iter().take(CONTINUE_WATCHING_LEN).cloned().collect()
        } else {
            Vec::new()
        };

        let empty_message = snapshot.is_empty_result().then(|| {
            if search.is_empty() {
                "No movies found.".to_string()
            } else {
                format!("No movies found for \"{}\".", search)
            }
        });

        Self {
            cards,
            continue_watching,
            empty_message,
            loading: snapshot.loading,
            has_more: snapshot.has_more,
            total_count: snapshot.total_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{FilterState, Page, Pagination};
    use crate::domain::listing::ListingState;

    fn loaded(movies: Vec<MovieSummary>) -> ListingSnapshot {
        searched("", movies)
    }

    fn searched(text: &str, movies: Vec<MovieSummary>) -> ListingSnapshot {
        let mut state = ListingState::new(FilterState::default());
        let request = state.set_search_text(text).unwrap_or_else(|| state.refresh());
        let count = movies.len() as u64;
        state.apply_page(
            &request,
            Page {
                movies,
                pagination: Pagination::single(1, count),
            },
        );
        state.snapshot()
    }

    fn movies() -> Vec<MovieSummary> {
        (1..=5)
            .map(|id| MovieSummary::new(id, format!("M{}", id), "Drama").with_premium(id % 2 == 0))
            .collect()
    }

    #[test]
    fn premium_cards_locked_for_basic_plan() {
        let view = ListingView::build(&loaded(movies()), Some(PlanType::Basic));
        let locked: Vec<bool> = view.cards.iter().map(|c| c.locked).collect();
        assert_eq!(locked, [false, true, false, true, false]);

        let view = ListingView::build(&loaded(movies()), Some(PlanType::Premium));
        assert!(view.cards.iter().all(|c| !c.locked));
    }

    #[test]
    fn continue_watching_only_when_not_searching() {
        let view = ListingView::build(&loaded(movies()), None);
        assert_eq!(view.continue_watching.len(), CONTINUE_WATCHING_LEN);

        let view = ListingView::build(&searched("M1", movies()), None);
        assert!(view.continue_watching.is_empty());
    }

    #[test]
    fn empty_message_mentions_search_text() {
        let view = ListingView::build(&searched("  zzz ", Vec::new()), None);
        assert_eq!(view.empty_message.as_deref(), Some("No movies found for \"zzz\"."));

        let view = ListingView::build(&loaded(Vec::new()), None);
        assert_eq!(view.empty_message.as_deref(), Some("No movies found."));
    }

    #[test]
    fn no_empty_message_while_loading() {
        let mut state = ListingState::new(FilterState::default());
        state.refresh();
        let view = ListingView::build(&state.snapshot(), None);
        assert!(view.loading);
        assert_eq!(view.empty_message, None);
    }
}
