//! Listing behaviour configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::domain::catalog::{FilterState, SortMode};

/// Listing configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ListingConfig {
    /// Quiet period before a typed search is issued
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Genre shown before the user picks one (empty = all)
    #[serde(default)]
    pub default_genre: String,

    #[serde(default)]
    pub default_sort: SortMode,
}

impl ListingConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Filter a fresh listing starts with.
    pub fn initial_filter(&self) -> FilterState {
        FilterState::new(self.default_genre.clone(), self.default_sort)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.debounce_ms == 0 || self.debounce_ms > 5000 {
            return Err(ValidationError::InvalidDebounce);
        }
        Ok(())
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            default_genre: String::new(),
            default_sort: SortMode::default(),
        }
    }
}

fn default_debounce_ms() -> u64 {
    400
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_defaults() {
        let config = ListingConfig::default();
        assert_eq!(config.debounce(), Duration::from_millis(400));
        assert_eq!(config.initial_filter(), FilterState::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_debounce_bounds() {
        for (ms, ok) in [(0, false), (1, true), (5000, true), (5001, false)] {
            let config = ListingConfig {
                debounce_ms: ms,
                ..Default::default()
            };
            assert_eq!(config.validate().is_ok(), ok, "debounce {}", ms);
        }
    }
}
