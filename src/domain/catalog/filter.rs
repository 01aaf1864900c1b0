//! Filter and sort settings for the movie listing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::MovieSummary;
use crate::domain::foundation::ValidationError;

/// Genres offered by the listing's genre picker. An empty genre means all.
pub const GENRES: &[&str] = &["Action", "Romance", "Drama", "Horror", "Crime", "Sci-Fi"];

/// Client-side ordering of the accumulated listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Rating, highest first.
    #[default]
    TopRated,
    /// Release year, newest first.
    LatestByYear,
}

impl SortMode {
    pub fn label(&self) -> &'static str {
        match self {
            SortMode::TopRated => "Top Rated",
            SortMode::LatestByYear => "Latest by Year",
        }
    }

    /// Stable in-place sort; equal keys keep their server order.
    pub fn apply(&self, movies: &mut [MovieSummary]) {
        match self {
            SortMode::TopRated => movies.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
            SortMode::LatestByYear => movies.sort_by(|a, b| b.release_year.cmp(&a.release_year)),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for SortMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace([' ', '-'], "_").as_str() {
            "top_rated" | "rating" => Ok(SortMode::TopRated),
            "latest_by_year" | "latest" | "year" => Ok(SortMode::LatestByYear),
            other => Err(ValidationError::invalid_format(
                "sort_mode",
                format!("unknown sort mode '{}'", other),
            )),
        }
    }
}

/// What the server is asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingQuery {
    ByTitle(String),
    ByGenre(String),
}

/// Everything the user can change about the listing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub search_text: String,
    pub genre: String,
    pub sort_mode: SortMode,
}

impl FilterState {
    pub fn new(genre: impl Into<String>, sort_mode: SortMode) -> Self {
        Self {
            search_text: String::new(),
            genre: genre.into(),
            sort_mode,
        }
    }

    pub fn is_searching(&self) -> bool {
        !self.search_text.trim().is_empty()
    }

    /// A non-blank search takes precedence over the genre filter.
    pub fn query(&self) -> ListingQuery {
        if self.is_searching() {
            ListingQuery::ByTitle(self.search_text.trim().to_string())
        } else {
            ListingQuery::ByGenre(self.genre.clone())
        }
    }
}
