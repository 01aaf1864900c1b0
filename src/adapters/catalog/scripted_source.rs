//! Scripted Movie Source for testing and offline browsing.
//!
//! An in-memory implementation of the MovieQueryService port that paginates
//! a fixed catalogue.
//!
//! # Features
//!
//! - Genre filter and case-insensitive title search
//! - Simulated latency, globally or per query text
//! - Failure injection (failed queries yield an empty page, like the HTTP adapter)
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let source = ScriptedMovieSource::new(movies)
//!     .with_per_page(2)
//!     .with_delay_for("Inc", Duration::from_millis(500));
//!
//! let page = source.fetch_by_title("Inception", 1).await;
//! assert_eq!(source.calls().len(), 1);
//! ```

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::catalog::{ListingQuery, MovieSummary, Page, Pagination, DEFAULT_PER_PAGE};
use crate::ports::MovieQueryService;

/// One recorded call to the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedQuery {
    pub query: ListingQuery,
    pub page: u32,
}

#[derive(Debug, Clone)]
pub struct ScriptedMovieSource {
    catalog: Arc<Vec<MovieSummary>>,
    per_page: u32,
    delay: Duration,
    /// Latency keyed by genre or title text, overriding `delay`.
    delays: HashMap<String, Duration>,
    /// Query texts whose fetches fail.
    failing: HashSet<String>,
    calls: Arc<Mutex<Vec<RecordedQuery>>>,
}

impl ScriptedMovieSource {
    pub fn new(catalog: Vec<MovieSummary>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            per_page: DEFAULT_PER_PAGE,
            delay: Duration::ZERO,
            delays: HashMap::new(),
            failing: HashSet::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A small built-in catalogue for running without a server.
    pub fn demo() -> Self {
        let rows: [(i64, &str, &str, i32, f64, bool); 12] = [
            (1, "Inception", "Sci-Fi", 2010, 8.8, false),
            (2, "Interstellar", "Sci-Fi", 2014, 8.7, true),
            (3, "The Dark Knight", "Action", 2008, 9.0, false),
            (4, "Heat", "Crime", 1995, 8.3, false),
            (5, "Dune: Part Two", "Sci-Fi", 2024, 8.6, true),
            (6, "Parasite", "Thriller", 2019, 8.5, false),
            (7, "Spirited Away", "Animation", 2001, 8.6, false),
            (8, "Mad Max: Fury Road", "Action", 2015, 8.1, true),
            (9, "The Grand Budapest Hotel", "Comedy", 2014, 8.1, false),
            (10, "Get Out", "Horror", 2017, 7.8, false),
            (11, "La La Land", "Romance", 2016, 8.0, true),
            (12, "Inside Out", "Animation", 2015, 8.1, false),
        ];
        let catalog = rows
            .into_iter()
            .map(|(id, title, genre, year, rating, premium)| {
                MovieSummary::new(id, title, genre)
                    .with_release_year(year)
                    .with_rating(rating)
                    .with_duration(120)
                    .with_premium(premium)
            })
            .collect();
        Self::new(catalog).with_per_page(5)
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page.max(1);
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Latency for fetches whose genre or title equals `query`.
    pub fn with_delay_for(mut self, query: impl Into<String>, delay: Duration) -> Self {
        self.delays.insert(query.into(), delay);
        self
    }

    /// Makes fetches whose genre or title equals `query` fail.
    pub fn with_failure_for(mut self, query: impl Into<String>) -> Self {
        self.failing.insert(query.into());
        self
    }

    pub fn calls(&self) -> Vec<RecordedQuery> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    async fn serve(&self, query: ListingQuery, page: u32) -> Page {
        let key = match &query {
            ListingQuery::ByTitle(text) | ListingQuery::ByGenre(text) => text.clone(),
        };
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(RecordedQuery {
                query: query.clone(),
                page,
            });

        let delay = self.delays.get(&key).copied().unwrap_or(self.delay);
        if !delay.is_zero() {
            sleep(delay).await;
        }

        if self.failing.contains(&key) {
            tracing::warn!(query = %key, page, "Scripted failure, returning empty page");
            return Page::empty(page);
        }

        let matches: Vec<&MovieSummary> = self
            .catalog
            .iter()
            .filter(|m| matches_query(m, &query))
            .collect();

        let total_count = matches.len() as u64;
        let total_pages = ((matches.len() as u32 + self.per_page - 1) / self.per_page).max(1);
        let start = (page.saturating_sub(1) * self.per_page) as usize;
        let movies = matches
            .into_iter()
            .skip(start)
            .take(self.per_page as usize)
            .cloned()
            .collect();

        Page {
            movies,
            pagination: Pagination {
                current_page: page,
                total_pages,
                total_count,
                per_page: self.per_page,
            },
        }
    }
}

fn matches_query(movie: &MovieSummary, query: &ListingQuery) -> bool {
    match query {
        ListingQuery::ByTitle(text) => movie
            .title
            .to_lowercase()
            .contains(&text.trim().to_lowercase()),
        ListingQuery::ByGenre(genre) if genre.is_empty() => true,
        ListingQuery::ByGenre(genre) => movie.genre.eq_ignore_ascii_case(genre),
    }
}

#[async_trait]
impl MovieQueryService for ScriptedMovieSource {
    async fn fetch_by_genre(&self, genre: &str, page: u32) -> Page {
        self.serve(ListingQuery::ByGenre(genre.to_string()), page).await
    }

    async fn fetch_by_title(&self, query: &str, page: u32) -> Page {
        self.serve(ListingQuery::ByTitle(query.to_string()), page).await
    }
}
