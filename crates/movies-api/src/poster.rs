//! Poster image URL resolution for the remote image view.
//!
//! The view concatenates a fixed image base URL with the relative
//! `poster_path` of a movie. No image bytes are fetched here.

use std::fmt;

use anyhow::{Context, Result};
use url::Url;

/// Default image base URL (w500 rendition).
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// Label shown when a movie has no poster.
pub const NOT_FOUND_LABEL: &str = "Not Found";

/// What the image view should render for a poster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PosterImage {
    /// Load the image from this URL (placeholder while loading).
    Remote(Url),
    /// No poster path: render the "Not Found" label.
    NotFound,
}

impl PosterImage {
    /// Resolves `poster_path` against `image_base` by plain concatenation.
    ///
    /// # Errors
    ///
    /// Returns an error if the concatenated string is not a valid URL.
    pub fn resolve(image_base: &str, poster_path: Option<&str>) -> Result<Self> {
        let Some(path) = poster_path else {
            return Ok(Self::NotFound);
        };
        let raw = format!("{image_base}{path}");
        let url = Url::parse(&raw).with_context(|| format!("invalid poster URL: {raw}"))?;
        Ok(Self::Remote(url))
    }

    /// Returns the URL to load, if any.
    #[must_use]
    pub const fn url(&self) -> Option<&Url> {
        match self {
            Self::Remote(url) => Some(url),
            Self::NotFound => None,
        }
    }
}

impl fmt::Display for PosterImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote(url) => write!(f, "{url}"),
            Self::NotFound => f.write_str(NOT_FOUND_LABEL),
        }
    }
}
