//! Wire shapes of the movie explorer API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::catalog::{MovieDetails, MovieSummary, Page, Pagination};
use crate::domain::session::UserRole;

/// `GET /movies` body. Both fields may be absent.
#[derive(Debug, Deserialize)]
pub struct MoviesResponse {
    #[serde(default)]
    pub movies: Option<Vec<MovieSummary>>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

impl MoviesResponse {
    pub fn into_page(self, requested_page: u32) -> Page {
        Page::from_parts(self.movies, self.pagination, requested_page)
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateMovieResponse {
    pub movie: MovieDetails,
}

#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Error fields the server may put in a failure body.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub errors: Option<Vec<String>>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// `errors` joined with ", ", else `error`, else `message`.
    pub fn into_message(self) -> Option<String> {
        match self.errors {
            Some(errors) if !errors.is_empty() => Some(errors.join(", ")),
            _ => self.error.or(self.message),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserEnvelope<T: Serialize> {
    pub user: T,
}

#[derive(Debug, Serialize)]
pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// `POST /users/sign_in` body.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CheckoutRequest<'a> {
    pub plan_type: &'a str,
}

/// Checkout URL from `checkoutUrl`, `data.checkoutUrl` or `url`, in that order.
pub fn extract_checkout_url(body: &Value) -> Option<String> {
    let candidates = [
        body.get("checkoutUrl"),
        body.get("data").and_then(|d| d.get("checkoutUrl")),
        body.get("url"),
    ];
    candidates
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

/// The `error` field of an otherwise successful body.
pub fn embedded_error(body: &Value) -> Option<String> {
    body.get("error").map(|e| match e {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}
