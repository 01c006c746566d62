//! Remote movie data source.
//!
//! Resolves one of five endpoint templates, performs a single HTTP GET,
//! and decodes the JSON body into typed values or a `MovieApiError`.

mod api;
mod callback;
mod client;
mod endpoint;
mod error;
mod types;

#[allow(clippy::module_name_repetitions)]
pub use api::{LocalMovieApi, MovieApi};
#[allow(clippy::module_name_repetitions)]
pub use callback::{CallbackClient, UnresolvedPolicy};
pub use client::{RemoteMovieClient, RemoteMovieClientBuilder};
pub use endpoint::{DEFAULT_BASE_URL, Endpoint, escape_spaces};
#[allow(clippy::module_name_repetitions)]
pub use error::MovieApiError;
pub use types::{Genre, MovieDetail, MovieSummary, Video};
