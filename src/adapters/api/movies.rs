//! HTTP implementation of the movie listing and catalogue ports.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use secrecy::SecretString;

use super::client::{bearer, ApiClient};
use super::dto::{MessageResponse, MoviesResponse, UpdateMovieResponse};
use crate::domain::catalog::{MovieDetails, Page};
use crate::domain::forms::{Upload, ValidatedMovie};
use crate::domain::foundation::MovieId;
use crate::ports::{ApiError, MovieCatalog, MovieQueryService};

/// Movie endpoints of the remote API.
#[derive(Debug, Clone)]
pub struct HttpMovieApi {
    client: ApiClient,
}

impl HttpMovieApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fallible genre listing, for callers that must tell an outage from an
    /// empty result.
    pub async fn try_fetch_by_genre(&self, genre: &str, page: u32) -> Result<Page, ApiError> {
        self.list(&[("genre", genre)], page).await
    }

    /// Fallible title search.
    pub async fn try_fetch_by_title(&self, query: &str, page: u32) -> Result<Page, ApiError> {
        self.list(&[("title", query)], page).await
    }

    async fn list(&self, filter: &[(&str, &str)], page: u32) -> Result<Page, ApiError> {
        let page_param = page.to_string();
        let request = self
            .client
            .http()
            .get(self.client.api_url("/movies"))
            .header("Accept", "application/json")
            .query(filter)
            .query(&[("page", page_param.as_str())]);

        let body: MoviesResponse = self.client.send_json(request).await?;
        Ok(body.into_page(page))
    }

    fn movie_form(movie: &ValidatedMovie) -> Result<Form, ApiError> {
        let mut form = Form::new()
            .text("movie[title]", movie.title.clone())
            .text("movie[genre]", movie.genre.clone())
            .text("movie[release_year]", movie.release_year.to_string())
            .text("movie[director]", movie.director.clone())
            .text("movie[duration]", movie.duration.to_string())
            .text("movie[description]", movie.description.clone())
            .text("movie[rating]", movie.rating.to_string())
            .text("movie[premium]", movie.premium.to_string());

        if let Some(poster) = &movie.poster {
            form = form.part("movie[poster]", file_part(poster)?);
        }
        if let Some(banner) = &movie.banner {
            form = form.part("movie[banner]", file_part(banner)?);
        }
        Ok(form)
    }
}

fn file_part(upload: &Upload) -> Result<Part, ApiError> {
    Part::bytes(upload.bytes.clone())
        .file_name(upload.file_name.clone())
        .mime_str(&upload.content_type)
        .map_err(|e| ApiError::Decode(format!("Invalid content type '{}': {}", upload.content_type, e)))
}

#[async_trait]
impl MovieQueryService for HttpMovieApi {
    async fn fetch_by_genre(&self, genre: &str, page: u32) -> Page {
        match self.try_fetch_by_genre(genre, page).await {
            Ok(result) => {
                tracing::debug!(genre, page, count = result.movies.len(), "Fetched movies by genre");
                result
            }
            Err(e) => {
                tracing::warn!(genre, page, error = %e, "Movie listing failed, returning empty page");
                Page::empty(page)
            }
        }
    }

    async fn fetch_by_title(&self, query: &str, page: u32) -> Page {
        match self.try_fetch_by_title(query, page).await {
            Ok(result) => {
                tracing::debug!(query, page, count = result.movies.len(), "Fetched movies by title");
                result
            }
            Err(e) => {
                tracing::warn!(query, page, error = %e, "Movie search failed, returning empty page");
                Page::empty(page)
            }
        }
    }
}

#[async_trait]
impl MovieCatalog for HttpMovieApi {
    async fn get_movie(&self, token: &SecretString, id: MovieId) -> Result<MovieDetails, ApiError> {
        let request = self
            .client
            .http()
            .get(self.client.api_url(&format!("/movies/{}", id)))
            .header("Accept", "application/json");

        self.client.send_json(bearer(request, token)).await
    }

    async fn create_movie(
        &self,
        token: &SecretString,
        movie: &ValidatedMovie,
    ) -> Result<String, ApiError> {
        let request = self
            .client
            .http()
            .post(self.client.api_url("/movies"))
            .header("Accept", "application/json")
            .multipart(Self::movie_form(movie)?);

        let body: MessageResponse = self.client.send_json(bearer(request, token)).await?;
        tracing::info!(title = %movie.title, "Movie created");
        Ok(body.message.unwrap_or_else(|| "Movie added successfully".to_string()))
    }

    async fn update_movie(
        &self,
        token: &SecretString,
        id: MovieId,
        movie: &ValidatedMovie,
    ) -> Result<MovieDetails, ApiError> {
        let request = self
            .client
            .http()
            .patch(self.client.api_url(&format!("/movies/{}", id)))
            .header("Accept", "application/json")
            .multipart(Self::movie_form(movie)?);

        let body: UpdateMovieResponse = self.client.send_json(bearer(request, token)).await?;
        tracing::info!(movie_id = %id, "Movie updated");
        Ok(body.movie)
    }

    async fn delete_movie(&self, token: &SecretString, id: MovieId) -> Result<(), ApiError> {
        let request = self
            .client
            .http()
            .delete(self.client.api_url(&format!("/movies/{}", id)))
            .header("Accept", "application/json");

        self.client.send_checked(bearer(request, token)).await?;
        tracing::info!(movie_id = %id, "Movie deleted");
        Ok(())
    }
}
