//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, error types and the state machine trait that form
//! the vocabulary of the movie explorer domain.

mod auth;
mod errors;
mod ids;
mod state_machine;

pub use auth::AuthError;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::MovieId;
pub use state_machine::StateMachine;
