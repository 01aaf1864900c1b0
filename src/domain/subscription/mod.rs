//! Subscription domain module.
//!
//! Plan tiers, checkout passes and the premium access gate.

mod plan;

pub use plan::{is_locked, CheckoutPlan, PlanType};
