//! Movie Query Service Port - paginated catalogue lookups.

use async_trait::async_trait;

use crate::domain::catalog::{ListingQuery, Page};

/// Port for the public, unauthenticated movie listing endpoints.
///
/// Implementations are stateless and never retry. Failures are not raised:
/// any transport, status or decoding problem yields `Page::empty(page)`, so a
/// caller cannot tell "service down" from "no results" through this port.
#[async_trait]
pub trait MovieQueryService: Send + Sync {
    /// Fetch one page of movies in `genre`. An empty genre means all genres.
    async fn fetch_by_genre(&self, genre: &str, page: u32) -> Page;

    /// Fetch one page of movies whose title matches `query`.
    async fn fetch_by_title(&self, query: &str, page: u32) -> Page;

    /// Dispatch on a listing query.
    async fn fetch(&self, query: &ListingQuery, page: u32) -> Page {
        match query {
            ListingQuery::ByTitle(title) => self.fetch_by_title(title, page).await,
            ListingQuery::ByGenre(genre) => self.fetch_by_genre(genre, page).await,
        }
    }
}
