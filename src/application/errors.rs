//! Errors raised by application services.

use thiserror::Error;

use crate::domain::foundation::{AuthError, DomainError, ErrorCode, ValidationError};
use crate::ports::{ApiError, StorageError};

#[derive(Debug, Error)]
pub enum AccountError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The server refused the request; the message is shown as-is.
    #[error("{0}")]
    Rejected(String),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Only supervisors can manage the catalogue")]
    Forbidden,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

#[derive(Debug, Error)]
pub enum SubscriptionError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

#[derive(Debug, Error)]
pub enum WatchListError {
    #[error("Upgrade to premium to add this movie.")]
    PremiumRequired,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

fn api_code(error: &ApiError) -> ErrorCode {
    match error {
        ApiError::Unauthorized(_) => ErrorCode::Unauthorized,
        ApiError::Status { status: 404, .. } => ErrorCode::MovieNotFound,
        ApiError::Status { status: 403, .. } => ErrorCode::Forbidden,
        ApiError::Network(_) | ApiError::Timeout => ErrorCode::NetworkError,
        ApiError::Status { .. } | ApiError::Decode(_) => ErrorCode::InternalError,
    }
}

fn auth_code(error: &AuthError) -> ErrorCode {
    match error {
        AuthError::InsufficientPermissions => ErrorCode::Forbidden,
        _ => ErrorCode::Unauthorized,
    }
}

impl From<AccountError> for DomainError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::Validation(e) => e.into(),
            AccountError::Rejected(msg) => DomainError::new(ErrorCode::Unauthorized, msg),
            AccountError::Auth(e) => DomainError::new(auth_code(&e), e.to_string()),
            AccountError::Api(e) => DomainError::new(api_code(&e), e.user_message()),
            AccountError::Storage(e) => DomainError::new(ErrorCode::StorageError, e.to_string()),
        }
    }
}

impl From<CatalogError> for DomainError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Validation(e) => e.into(),
            CatalogError::Forbidden => DomainError::new(ErrorCode::Forbidden, err.to_string()),
            CatalogError::Auth(e) => DomainError::new(auth_code(&e), e.to_string()),
            CatalogError::Api(e) => DomainError::new(api_code(&e), e.user_message()),
        }
    }
}

impl From<SubscriptionError> for DomainError {
    fn from(err: SubscriptionError) -> Self {
        match err {
            SubscriptionError::Validation(e) => e.into(),
            SubscriptionError::Auth(e) => DomainError::new(auth_code(&e), e.to_string()),
            SubscriptionError::Api(e) => DomainError::new(api_code(&e), e.user_message()),
        }
    }
}

impl From<WatchListError> for DomainError {
    fn from(err: WatchListError) -> Self {
        match err {
            WatchListError::PremiumRequired => {
                DomainError::new(ErrorCode::PremiumRequired, err.to_string())
            }
            WatchListError::Storage(e) => DomainError::new(ErrorCode::StorageError, e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_account_error_shows_server_message() {
        let err = AccountError::Rejected("Invalid email or password".into());
        assert_eq!(err.to_string(), "Invalid email or password");
        let domain: DomainError = err.into();
        assert_eq!(domain.code, ErrorCode::Unauthorized);
    }

    #[test]
    fn missing_movie_maps_to_not_found() {
        let domain: DomainError = CatalogError::Api(ApiError::status(404, "Movie not found")).into();
        assert_eq!(domain.code, ErrorCode::MovieNotFound);
        assert_eq!(domain.message, "Movie not found");
    }

    #[test]
    fn premium_required_message() {
        let domain: DomainError = WatchListError::PremiumRequired.into();
        assert_eq!(domain.code, ErrorCode::PremiumRequired);
        assert_eq!(domain.message, "Upgrade to premium to add this movie.");
    }
}
