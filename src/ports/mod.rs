//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Remote API Ports
//!
//! - `MovieQueryService` - Public paginated listing (never fails, degrades to empty)
//! - `MovieCatalog` - Authenticated single-movie reads and supervisor edits
//! - `SubscriptionGateway` - Plan status and checkout
//! - `AccountGateway` - Sign up, sign in, sign out
//!
//! ## Client Ports
//!
//! - `SessionStore` - Persisted key/value client state
//! - `Notifier` - User-facing notifications

mod account_gateway;
mod api_error;
mod movie_catalog;
mod movie_query_service;
mod notifier;
mod session_store;
mod subscription_gateway;

pub use account_gateway::{AccountGateway, NewAccount};
pub use api_error::ApiError;
pub use movie_catalog::MovieCatalog;
pub use movie_query_service::MovieQueryService;
pub use notifier::{Notification, NotificationLevel, Notifier};
pub use session_store::{keys, SessionStore, StorageError};
pub use subscription_gateway::{SubscriptionGateway, SubscriptionStatus};
