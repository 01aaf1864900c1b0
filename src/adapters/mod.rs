//! Adapters - Implementations of port interfaces.
//!
//! - `api` - reqwest clients for the movie explorer REST API
//! - `storage` - File and in-memory session stores
//! - `notify` - Tracing and recording notifiers
//! - `catalog` - Scripted in-memory movie source

pub mod api;
pub mod catalog;
pub mod notify;
pub mod storage;

pub use api::{ApiClient, ApiClientConfig, HttpAccountApi, HttpMovieApi, HttpSubscriptionApi};
pub use catalog::{RecordedQuery, ScriptedMovieSource};
pub use notify::{RecordingNotifier, TracingNotifier};
pub use storage::{FileSessionStore, InMemorySessionStore};
