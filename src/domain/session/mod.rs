//! Session domain module.
//!
//! The signed-in user, their role and bearer token.

mod profile;

pub use profile::{PersistedUserData, Session, UserProfile, UserRole};
