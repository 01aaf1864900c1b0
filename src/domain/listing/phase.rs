//! Fetch cycle phase and filter epoch.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Where the listing is in its fetch cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingPhase {
    /// No fetch in flight for the current epoch.
    #[default]
    Idle,
    /// Exactly one fetch in flight for the current epoch.
    Loading,
}

impl StateMachine for ListingPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use ListingPhase::*;
        matches!((self, target), (Idle, Loading) | (Loading, Idle))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            ListingPhase::Idle => vec![ListingPhase::Loading],
            ListingPhase::Loading => vec![ListingPhase::Idle],
        }
    }
}

/// Identifies one filter context. Responses tagged with an older epoch are
/// discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterEpoch(u64);

impl FilterEpoch {
    pub fn initial() -> Self {
        Self(0)
    }

    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for FilterEpoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
