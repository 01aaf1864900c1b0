//! Client-side form validation.
//!
//! Forms are validated before anything is submitted; a failing form never
//! reaches a gateway.

mod account;
mod movie_form;

pub use account::{is_valid_email, LoginForm, SignupForm, MIN_PASSWORD_LEN};
pub use movie_form::{
    MovieForm, Upload, ValidatedMovie, MAX_RATING, MAX_RELEASE_YEAR, MIN_RELEASE_YEAR,
};
