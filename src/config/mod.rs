//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `MOVIE_EXPLORER` prefix and nested values use double underscores as separators.
//! Every field has a default, so an empty environment yields a working client.
//!
//! # Example
//!
//! ```no_run
//! use movie_explorer::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Talking to {}", config.api.base_url);
//! ```

mod api;
mod client;
mod error;
mod listing;
mod storage;

pub use api::ApiConfig;
pub use client::{ClientConfig, Environment};
pub use error::{ConfigError, ValidationError};
pub use listing::ListingConfig;
pub use storage::StorageConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Client runtime configuration (environment, logging)
    #[serde(default)]
    pub client: ClientConfig,

    /// Remote API configuration
    #[serde(default)]
    pub api: ApiConfig,

    /// Listing behaviour (debounce, initial filter)
    #[serde(default)]
    pub listing: ListingConfig,

    /// Persisted client state
    #[serde(default)]
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `MOVIE_EXPLORER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `MOVIE_EXPLORER__API__BASE_URL=http://localhost:3000` -> `api.base_url`
    /// - `MOVIE_EXPLORER__LISTING__DEBOUNCE_MS=250` -> `listing.debounce_ms = 250`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("MOVIE_EXPLORER")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// - URL scheme (HTTPS required in production)
    /// - Timeout and debounce bounds
    /// - Non-empty session file path
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.api.validate(&self.client.environment)?;
        self.listing.validate()?;
        self.storage.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.client.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::SortMode;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 5] = [
        "MOVIE_EXPLORER__CLIENT__ENVIRONMENT",
        "MOVIE_EXPLORER__API__BASE_URL",
        "MOVIE_EXPLORER__API__REQUEST_TIMEOUT_SECS",
        "MOVIE_EXPLORER__LISTING__DEBOUNCE_MS",
        "MOVIE_EXPLORER__LISTING__DEFAULT_SORT",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();

        assert_eq!(
            config.api.base_url,
            "https://movie-explorer-ror-amansharma.onrender.com"
        );
        assert_eq!(config.api.api_prefix, "/api/v1");
        assert_eq!(config.listing.debounce_ms, 400);
        assert_eq!(config.client.environment, Environment::Development);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("MOVIE_EXPLORER__API__BASE_URL", "http://localhost:3000");
        env::set_var("MOVIE_EXPLORER__API__REQUEST_TIMEOUT_SECS", "5");
        env::set_var("MOVIE_EXPLORER__LISTING__DEBOUNCE_MS", "250");
        env::set_var("MOVIE_EXPLORER__LISTING__DEFAULT_SORT", "latest_by_year");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.api.base_url, "http://localhost:3000");
        assert_eq!(config.api.request_timeout_secs, 5);
        assert_eq!(config.listing.debounce_ms, 250);
        assert_eq!(config.listing.default_sort, SortMode::LatestByYear);
    }

    #[test]
    fn test_production_requires_https() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("MOVIE_EXPLORER__CLIENT__ENVIRONMENT", "production");
        env::set_var("MOVIE_EXPLORER__API__BASE_URL", "http://localhost:3000");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
        assert_eq!(config.validate(), Err(ValidationError::BaseUrlMustBeHttps));
    }
}
