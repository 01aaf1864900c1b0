//! Movie Catalog Port - authenticated catalogue administration.

use async_trait::async_trait;
use secrecy::SecretString;

use super::ApiError;
use crate::domain::catalog::MovieDetails;
use crate::domain::forms::ValidatedMovie;
use crate::domain::foundation::MovieId;

/// Port for reading single movies and for supervisor edits.
///
/// Every call carries the caller's bearer token; the service layer checks it
/// exists before calling.
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    /// Fetch the full record for one movie.
    ///
    /// # Errors
    /// `ApiError::Status` with 404 when the movie does not exist.
    async fn get_movie(&self, token: &SecretString, id: MovieId) -> Result<MovieDetails, ApiError>;

    /// Create a movie. Returns the server's confirmation message.
    async fn create_movie(
        &self,
        token: &SecretString,
        movie: &ValidatedMovie,
    ) -> Result<String, ApiError>;

    /// Replace a movie's fields. Returns the updated record.
    async fn update_movie(
        &self,
        token: &SecretString,
        id: MovieId,
        movie: &ValidatedMovie,
    ) -> Result<MovieDetails, ApiError>;

    async fn delete_movie(&self, token: &SecretString, id: MovieId) -> Result<(), ApiError>;
}
