//! In-memory movie sources.

mod scripted_source;

pub use scripted_source::{RecordedQuery, ScriptedMovieSource};
