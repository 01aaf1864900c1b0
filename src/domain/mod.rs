//! Domain layer containing the client's business rules and value types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ids, errors, state machine trait)
//! - `catalog` - Movie records, pages and filter state
//! - `listing` - Incremental listing state with epoch-based stale discard
//! - `subscription` - Plan tiers and the premium access gate
//! - `session` - Signed-in user and bearer token
//! - `watchlist` - The user's saved movies
//! - `forms` - Login, sign-up and movie form validation

pub mod catalog;
pub mod forms;
pub mod foundation;
pub mod listing;
pub mod session;
pub mod subscription;
pub mod watchlist;
