//! `MovieApi` trait definition.
#![allow(clippy::future_not_send)]

use super::error::MovieApiError;
use super::types::{MovieDetail, MovieSummary, Video};

/// Remote movie data source.
///
/// Abstracts API operations for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
/// Every call resolves exactly once, to a value or a `MovieApiError`.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(MovieApi: Send)]
pub trait LocalMovieApi {
    /// Fetches the popular movies list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request, status check, or JSON decoding fails.
    async fn fetch_popular(&self) -> Result<Vec<MovieSummary>, MovieApiError>;

    /// Fetches the upcoming movies list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request, status check, or JSON decoding fails.
    async fn fetch_upcoming(&self) -> Result<Vec<MovieSummary>, MovieApiError>;

    /// Fetches the details of a single movie.
    ///
    /// # Errors
    ///
    /// Returns an error if the ID is unusable, or the request, status check,
    /// or JSON decoding fails.
    async fn fetch_detail(&self, movie_id: &str) -> Result<MovieDetail, MovieApiError>;

    /// Fetches the videos attached to a movie.
    ///
    /// # Errors
    ///
    /// Returns an error if the ID is unusable, or the request, status check,
    /// or JSON decoding fails.
    async fn fetch_videos(&self, movie_id: &str) -> Result<Vec<Video>, MovieApiError>;

    /// Searches movies by free text.
    ///
    /// # Errors
    ///
    /// Returns an error if the query is unusable, or the request, status
    /// check, or JSON decoding fails.
    async fn search(&self, query: &str) -> Result<Vec<MovieSummary>, MovieApiError>;
}
