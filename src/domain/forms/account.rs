//! Sign-in and sign-up forms.
//!
//! Rules are checked in order and the first failure is returned, so the user
//! always sees one actionable message at a time.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::foundation::ValidationError;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));
static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z\s]{2,}$").expect("name pattern compiles"));
static MOBILE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("mobile pattern compiles"));

pub const MIN_PASSWORD_LEN: usize = 6;

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Upper, lower, digit and one non-alphanumeric character, at least six long.
fn is_strong_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| !c.is_ascii_alphanumeric())
}

/// Credentials entered on the sign-in screen.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(ValidationError::rule(
                "credentials",
                "Email and password are required.",
            ));
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::rule("email", "Please enter a valid email."));
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::rule(
                "password",
                "Password must be at least 6 characters.",
            ));
        }
        Ok(())
    }
}

/// Details entered on the sign-up screen.
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub mobile_number: String,
    pub agreed_to_terms: bool,
}

impl SignupForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !NAME_RE.is_match(&self.full_name) {
            return Err(ValidationError::rule(
                "full_name",
                "Full Name must contain only letters and be at least 2 characters.",
            ));
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::rule("email", "Invalid email format."));
        }
        if !MOBILE_RE.is_match(&self.mobile_number) {
            return Err(ValidationError::rule(
                "mobile_number",
                "Mobile number must be exactly 10 digits.",
            ));
        }
        if !is_strong_password(&self.password) {
            return Err(ValidationError::rule(
                "password",
                "Password must be at least 6 characters and include uppercase, lowercase, number, and special character.",
            ));
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::rule(
                "confirm_password",
                "Passwords do not match.",
            ));
        }
        if !self.agreed_to_terms {
            return Err(ValidationError::rule(
                "agreed_to_terms",
                "You must agree to the Terms and Conditions.",
            ));
        }
        Ok(())
    }
}
