//! Endpoint templates and URL resolution.

use url::Url;

use super::error::MovieApiError;

/// Default base URL for the movies API v3.
pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3/";

/// Query parameter carrying the API key.
const API_KEY_PARAM: &str = "api_key";

/// Characters that end a path segment. The URL parser reads `\` as `/`
/// for http(s).
const SEGMENT_DELIMITERS: [char; 4] = ['/', '\\', '?', '#'];

/// Percent-encoded `.`, `/` and `\`. The parser treats `%2e` as a dot
/// segment; servers may decode the other two into separators.
const ENCODED_DELIMITERS: [&str; 3] = ["%2e", "%2f", "%5c"];

/// One of the five fixed endpoint templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// `movie/popular`
    Popular,
    /// `movie/upcoming`
    Upcoming,
    /// `movie/{id}`
    Detail(String),
    /// `movie/{id}/videos`
    Videos(String),
    /// `search/movie?query={query}`
    Search(String),
}

impl Endpoint {
    /// Short operation name, used as a tracing field.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Popular => "popular",
            Self::Upcoming => "upcoming",
            Self::Detail(_) => "detail",
            Self::Videos(_) => "videos",
            Self::Search(_) => "search",
        }
    }

    /// Resolves the endpoint against `base`, appending `api_key` when given.
    ///
    /// Pure: no I/O, same input always yields the same URL.
    ///
    /// # Errors
    ///
    /// Returns `MovieApiError::InvalidEndpoint` if the movie ID or query
    /// cannot form a URL for this endpoint.
    pub fn resolve(&self, base: &Url, api_key: Option<&str>) -> Result<Url, MovieApiError> {
        let path = self.relative_path()?;
        let mut url = base.join(&path).map_err(|e| {
            MovieApiError::InvalidEndpoint(format!("failed to join URL path {path}: {e}"))
        })?;
        if let Some(key) = api_key {
            url.query_pairs_mut().append_pair(API_KEY_PARAM, key);
        }
        Ok(url)
    }

    /// Builds the path (and query) relative to the base URL.
    fn relative_path(&self) -> Result<String, MovieApiError> {
        match self {
            Self::Popular => Ok(String::from("movie/popular")),
            Self::Upcoming => Ok(String::from("movie/upcoming")),
            Self::Detail(id) => {
                validate_movie_id(id)?;
                Ok(format!("movie/{id}"))
            }
            Self::Videos(id) => {
                validate_movie_id(id)?;
                Ok(format!("movie/{id}/videos"))
            }
            Self::Search(query) => {
                reject_control_chars("search query", query)?;
                Ok(format!("search/movie?query={}", escape_spaces(query)))
            }
        }
    }
}

/// Replaces every space with the literal `%20`.
///
/// No other character is escaped: `&`, `?` and `#` pass through unchanged,
/// so `a&b` reaches the server as two query pairs and `a#b` loses `#b` to
/// the fragment.
#[must_use]
pub fn escape_spaces(query: &str) -> String {
    query.replace(' ', "%20")
}

/// Rejects movie IDs that would resolve to a different endpoint.
fn validate_movie_id(id: &str) -> Result<(), MovieApiError> {
    if id.is_empty() {
        return Err(MovieApiError::InvalidEndpoint(String::from(
            "movie id must not be empty",
        )));
    }
    let lowered = id.to_ascii_lowercase();
    if id == "."
        || id == ".."
        || id.contains(SEGMENT_DELIMITERS)
        || ENCODED_DELIMITERS.iter().any(|e| lowered.contains(e))
    {
        return Err(MovieApiError::InvalidEndpoint(format!(
            "movie id is not a single path segment: {id:?}"
        )));
    }
    reject_control_chars("movie id", id)
}

/// The URL parser strips tabs and newlines silently; refuse them instead.
fn reject_control_chars(what: &str, value: &str) -> Result<(), MovieApiError> {
    if value.chars().any(|c| c.is_ascii_control()) {
        return Err(MovieApiError::InvalidEndpoint(format!(
            "{what} contains control characters: {value:?}"
        )));
    }
    Ok(())
}
