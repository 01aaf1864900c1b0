//! Listing domain module.
//!
//! The incremental listing expressed as an explicit state machine: a fetch
//! phase (`Idle`/`Loading`), a filter epoch counter and pure merge rules.

mod phase;
mod state;

pub use phase::{FilterEpoch, ListingPhase};
pub use state::{FetchRequest, ListingSnapshot, ListingState, MergeOutcome};
