//! Movies API client library.
//!
//! Fetches popular, upcoming, detail, video, and search data from a
//! TMDB-style movies API, and resolves poster image URLs.

/// Poster image URL resolution.
pub mod poster;

/// Remote movies API client.
pub mod remote;
