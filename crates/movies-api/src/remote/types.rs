//! Movies API response types.

use serde::{Deserialize, Serialize};

// --- List Envelope ---

/// Outer `{ "results": [...] }` shape used by the list endpoints.
///
/// Never handed to callers: the client unwraps it into `Vec<T>`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Envelope<T> {
    /// Listed items in API order.
    pub results: Vec<T>,
}

impl<T> Envelope<T> {
    /// Unwraps the envelope into its items.
    pub(crate) fn into_results(self) -> Vec<T> {
        self.results
    }
}

// --- Movie Summary ---

/// A movie as returned by the popular, upcoming, and search endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    /// API movie ID.
    pub id: u64,
    /// Localized title.
    pub title: String,
    /// Overview text.
    pub overview: String,
    /// Poster image path, relative to the image base URL.
    pub poster_path: Option<String>,
    /// Backdrop image path, relative to the image base URL.
    #[serde(default)]
    pub backdrop_path: Option<String>,
    /// Release date (YYYY-MM-DD or null).
    #[serde(default)]
    pub release_date: Option<String>,
    /// Vote average.
    pub vote_average: f64,
}

// --- Movie Detail ---

/// Response from the `movie/{id}` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    /// API movie ID.
    pub id: u64,
    /// Localized title.
    pub title: String,
    /// Overview text.
    pub overview: String,
    /// Tagline.
    #[serde(default)]
    pub tagline: Option<String>,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Backdrop image path.
    #[serde(default)]
    pub backdrop_path: Option<String>,
    /// Release date.
    #[serde(default)]
    pub release_date: Option<String>,
    /// Runtime in minutes.
    #[serde(default)]
    pub runtime: Option<u32>,
    /// Release status (e.g., "Released", "Post Production").
    #[serde(default)]
    pub status: Option<String>,
    /// Vote average.
    pub vote_average: f64,
    /// Vote count.
    pub vote_count: u32,
    /// Genres.
    pub genres: Vec<Genre>,
}

/// Genre entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    /// Genre ID.
    pub id: u32,
    /// Genre name.
    pub name: String,
}

// --- Videos ---

/// A trailer or clip attached to a movie (`movie/{id}/videos`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    /// Video ID.
    pub id: String,
    /// Site-specific key (e.g., the `YouTube` video ID).
    pub key: String,
    /// Display name.
    pub name: String,
    /// Hosting site (e.g., "YouTube").
    pub site: String,
    /// Video type (e.g., "Trailer", "Teaser", "Clip").
    #[serde(rename = "type")]
    pub kind: String,
}
