//! Application layer - stateful services that orchestrate domain and ports.
//!
//! Each service is an explicit object a UI holds on to; none of them depends
//! on a UI framework.

mod account_service;
mod catalog_service;
mod errors;
pub mod listing;
mod session_context;
mod subscription_status;
mod watchlist_service;

pub use account_service::{AccountService, DEFAULT_LOGOUT_FAILURE, DEFAULT_SIGNUP_FAILURE};
pub use catalog_service::CatalogService;
pub use errors::{AccountError, CatalogError, SubscriptionError, WatchListError};
pub use listing::{
    ListingController, ListingView, MovieCard, SearchDebouncer, SearchTarget, DEFAULT_DEBOUNCE,
};
pub use session_context::SessionContext;
pub use subscription_status::{
    SubscriptionState, SubscriptionStatusProvider, STATUS_FAILURE_MESSAGE,
};
pub use watchlist_service::WatchListService;
