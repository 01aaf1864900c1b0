//! Catalogue administration form.

use crate::domain::catalog::MovieDetails;
use crate::domain::foundation::ValidationError;

pub const MIN_RELEASE_YEAR: i32 = 1888;
pub const MAX_RELEASE_YEAR: i32 = 2100;
pub const MAX_RATING: f64 = 10.0;

/// A file chosen for upload alongside the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }
}

/// Raw text as typed into the add/edit movie screen.
#[derive(Debug, Clone, Default)]
pub struct MovieForm {
    pub title: String,
    pub genre: String,
    pub release_year: String,
    pub director: String,
    pub duration: String,
    pub description: String,
    pub rating: String,
    pub premium: bool,
    pub poster: Option<Upload>,
    pub banner: Option<Upload>,
}

/// A form that passed validation, with numeric fields parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedMovie {
    pub title: String,
    pub genre: String,
    pub release_year: i32,
    pub director: String,
    pub duration: u32,
    pub description: String,
    pub rating: f64,
    pub premium: bool,
    pub poster: Option<Upload>,
    pub banner: Option<Upload>,
}

impl MovieForm {
    /// Prefills the edit screen from an existing record.
    pub fn from_details(details: &MovieDetails) -> Self {
        let movie = &details.summary;
        Self {
            title: movie.title.clone(),
            genre: movie.genre.clone(),
            release_year: movie.release_year.to_string(),
            director: details.director.clone(),
            duration: movie.duration.to_string(),
            description: details.description.clone(),
            rating: movie.rating.to_string(),
            premium: movie.premium,
            poster: None,
            banner: None,
        }
    }

    pub fn validate(&self) -> Result<ValidatedMovie, ValidationError> {
        let title = required("title", &self.title)?;
        let genre = required("genre", &self.genre)?;
        let release_year = parse_release_year(&self.release_year)?;
        let director = required("director", &self.director)?;
        let duration = parse_duration(&self.duration)?;
        let description = required("description", &self.description)?;
        let rating = parse_rating(&self.rating)?;

        Ok(ValidatedMovie {
            title,
            genre,
            release_year,
            director,
            duration,
            description,
            rating,
            premium: self.premium,
            poster: self.poster.clone(),
            banner: self.banner.clone(),
        })
    }
}

fn required(field: &str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    Ok(trimmed.to_string())
}

fn parse_release_year(raw: &str) -> Result<i32, ValidationError> {
    let raw = required("release_year", raw)?;
    let year: i32 = raw
        .parse()
        .map_err(|_| ValidationError::invalid_format("release_year", "must be a whole number"))?;
    if !(MIN_RELEASE_YEAR..=MAX_RELEASE_YEAR).contains(&year) {
        return Err(ValidationError::out_of_range(
            "release_year",
            MIN_RELEASE_YEAR as f64,
            MAX_RELEASE_YEAR as f64,
            year as f64,
        ));
    }
    Ok(year)
}

fn parse_duration(raw: &str) -> Result<u32, ValidationError> {
    let raw = required("duration", raw)?;
    let minutes: u32 = raw
        .parse()
        .map_err(|_| ValidationError::invalid_format("duration", "must be a whole number of minutes"))?;
    if minutes == 0 {
        return Err(ValidationError::invalid_format("duration", "must be positive"));
    }
    Ok(minutes)
}

fn parse_rating(raw: &str) -> Result<f64, ValidationError> {
    let raw = required("rating", raw)?;
    let rating: f64 = raw
        .parse()
        .map_err(|_| ValidationError::invalid_format("rating", "must be a number"))?;
    if !rating.is_finite() || !(0.0..=MAX_RATING).contains(&rating) {
        return Err(ValidationError::out_of_range("rating", 0.0, MAX_RATING, rating));
    }
    Ok(rating)
}
