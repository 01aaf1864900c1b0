//! Movie records as returned by the catalogue API.

use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domain::foundation::MovieId;

/// Display projection of a movie, as listed by the catalogue endpoints.
///
/// Immutable once fetched. Numeric fields tolerate numeric strings on the
/// wire because the server serializes decimals as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: MovieId,
    pub title: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default, deserialize_with = "deserialize_i32_lenient")]
    pub release_year: i32,
    /// Rating on a 0-10 scale.
    #[serde(default, deserialize_with = "deserialize_f64_lenient")]
    pub rating: f64,
    /// Running time in minutes.
    #[serde(default, deserialize_with = "deserialize_u32_lenient")]
    pub duration: u32,
    #[serde(default)]
    pub premium: bool,
    #[serde(default)]
    pub poster_url: Option<String>,
    #[serde(default)]
    pub banner_url: Option<String>,
}

impl MovieSummary {
    /// Minimal constructor used by tests and the scripted movie source.
    pub fn new(id: i64, title: impl Into<String>, genre: impl Into<String>) -> Self {
        Self {
            id: MovieId::new(id),
            title: title.into(),
            genre: genre.into(),
            release_year: 0,
            rating: 0.0,
            duration: 0,
            premium: false,
            poster_url: None,
            banner_url: None,
        }
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    pub fn with_release_year(mut self, year: i32) -> Self {
        self.release_year = year;
        self
    }

    pub fn with_duration(mut self, minutes: u32) -> Self {
        self.duration = minutes;
        self
    }

    pub fn with_premium(mut self, premium: bool) -> Self {
        self.premium = premium;
        self
    }

    pub fn with_poster_url(mut self, url: impl Into<String>) -> Self {
        self.poster_url = Some(url.into());
        self
    }
}

/// Full movie record returned by the single-movie endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetails {
    #[serde(flatten)]
    pub summary: MovieSummary,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub director: String,
}

fn number_from_value(value: Value) -> Result<Option<f64>, String> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_f64()
            .map(Some)
            .ok_or_else(|| format!("number {} out of range", n)),
        Value::String(s) if s.trim().is_empty() => Ok(None),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|e| format!("invalid numeric string '{}': {}", s, e)),
        other => Err(format!("expected number or string, got {}", other)),
    }
}

/// Accepts `8.5`, `"8.5"` or `null` (as 0).
fn deserialize_f64_lenient<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(number_from_value(value).map_err(D::Error::custom)?.unwrap_or(0.0))
}

fn deserialize_i32_lenient<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let n = number_from_value(value).map_err(D::Error::custom)?.unwrap_or(0.0);
    if n < i32::MIN as f64 || n > i32::MAX as f64 {
        return Err(D::Error::custom(format!("year {} out of range", n)));
    }
    Ok(n.round() as i32)
}

fn deserialize_u32_lenient<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let n = number_from_value(value).map_err(D::Error::custom)?.unwrap_or(0.0);
    if n < 0.0 || n > u32::MAX as f64 {
        return Err(D::Error::custom(format!("duration {} out of range", n)));
    }
    Ok(n.round() as u32)
}
