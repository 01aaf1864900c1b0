//! REST adapters for the movie explorer API.

mod accounts;
mod client;
mod dto;
mod movies;
mod subscriptions;

pub use accounts::{HttpAccountApi, DEFAULT_LOGIN_FAILURE};
pub use client::{ApiClient, ApiClientConfig};
pub use movies::HttpMovieApi;
pub use subscriptions::HttpSubscriptionApi;
