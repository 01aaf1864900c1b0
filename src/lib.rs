//! Movie Explorer - client core for a streaming movie catalogue
//!
//! Browsing, debounced search, paginated infinite scroll with stale-response
//! discard, subscription gating, account flows and catalogue administration,
//! independent of any UI framework.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
