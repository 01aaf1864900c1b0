//! One paginated slice of the catalogue.

use serde::{Deserialize, Serialize};

use super::MovieSummary;

/// Page size the server uses when it omits pagination metadata.
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Cursor metadata attached to every listing response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_count: u64,
    pub per_page: u32,
}

impl Pagination {
    /// Metadata for a response that fits on a single page.
    pub fn single(page: u32, total_count: u64) -> Self {
        Self {
            current_page: page,
            total_pages: 1,
            total_count,
            per_page: DEFAULT_PER_PAGE,
        }
    }

    /// True if pages exist beyond `page`.
    pub fn has_more_after(&self, page: u32) -> bool {
        page < self.total_pages
    }
}

/// Ordered movies plus pagination metadata, produced by one query.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub movies: Vec<MovieSummary>,
    pub pagination: Pagination,
}

impl Page {
    /// The page returned when a query fails or matches nothing.
    pub fn empty(page: u32) -> Self {
        Self {
            movies: Vec::new(),
            pagination: Pagination::single(page, 0),
        }
    }

    /// Normalizes a possibly incomplete server response.
    ///
    /// Missing movies become an empty list; missing pagination is replaced
    /// by single-page metadata counting the movies that did arrive.
    pub fn from_parts(
        movies: Option<Vec<MovieSummary>>,
        pagination: Option<Pagination>,
        requested_page: u32,
    ) -> Self {
        let movies = movies.unwrap_or_default();
        let pagination = pagination
            .unwrap_or_else(|| Pagination::single(requested_page, movies.len() as u64));
        Self { movies, pagination }
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}
