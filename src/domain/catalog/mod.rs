//! Catalog domain module.
//!
//! Movie records, paginated result pages and the listing filter.

mod filter;
mod movie;
mod page;

pub use filter::{FilterState, ListingQuery, SortMode, GENRES};
pub use movie::{MovieDetails, MovieSummary};
pub use page::{Page, Pagination, DEFAULT_PER_PAGE};
