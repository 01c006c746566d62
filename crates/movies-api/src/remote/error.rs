//! `MovieApiError` - failure taxonomy of the remote-fetch pipeline.

use thiserror::Error;
use url::Url;

/// Errors resolved by `RemoteMovieClient` operations.
///
/// `Unreachable` and `InvalidResponse` are the two designed failure kinds.
/// The remaining variants are outcomes the legacy callback contract never
/// delivered; see [`MovieApiError::is_unresolved`].
#[derive(Debug, Error)]
#[allow(clippy::module_name_repetitions)]
pub enum MovieApiError {
    /// The transport could not reach the given URL.
    #[error("address unreachable: {}", without_query(.0))]
    Unreachable(Url),

    /// HTTP 200, but the body did not match the expected shape.
    #[error("invalid response")]
    InvalidResponse,

    /// The endpoint URL could not be built from the given parameters.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// The server answered with a status other than 200.
    #[error("unexpected HTTP status {status} from {}", without_query(.url))]
    UnexpectedStatus {
        /// URL that was requested.
        url: Url,
        /// Received status code.
        status: u16,
    },

    /// The response body could not be read.
    #[error("missing response body from {}", without_query(.0))]
    MissingBody(Url),
}

impl MovieApiError {
    /// Returns `true` for outcomes the legacy callback contract silently
    /// dropped: non-200 status, missing body, and unbuildable endpoint.
    #[must_use]
    pub const fn is_unresolved(&self) -> bool {
        matches!(
            self,
            Self::InvalidEndpoint(_) | Self::UnexpectedStatus { .. } | Self::MissingBody(_)
        )
    }
}

/// Renders `url` without its query and fragment, which may carry the API key.
fn without_query(url: &Url) -> String {
    let mut shown = url.clone();
    shown.set_query(None);
    shown.set_fragment(None);
    shown.to_string()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_designed_failures_are_resolved() {
        // Arrange
        let url = Url::parse("https://api.themoviedb.org/3/movie/popular").unwrap();

        // Act & Assert
        assert!(!MovieApiError::Unreachable(url).is_unresolved());
        assert!(!MovieApiError::InvalidResponse.is_unresolved());
    }

    #[test]
    fn test_dropped_failures_are_unresolved() {
        // Arrange
        let url = Url::parse("https://api.themoviedb.org/3/movie/popular").unwrap();

        // Act & Assert
        assert!(MovieApiError::InvalidEndpoint(String::from("empty movie id")).is_unresolved());
        assert!(
            MovieApiError::UnexpectedStatus {
                url: url.clone(),
                status: 404
            }
            .is_unresolved()
        );
        assert!(MovieApiError::MissingBody(url).is_unresolved());
    }

    #[test]
    fn test_display_includes_url_and_status() {
        // Arrange
        let url = Url::parse("https://api.themoviedb.org/3/movie/11").unwrap();
        let error = MovieApiError::UnexpectedStatus { url, status: 500 };

        // Act
        let message = error.to_string();

        // Assert
        assert_eq!(
            message,
            "unexpected HTTP status 500 from https://api.themoviedb.org/3/movie/11"
        );
    }

    #[test]
    fn test_display_omits_api_key() {
        // Arrange
        let url =
            Url::parse("https://api.themoviedb.org/3/search/movie?query=dune&api_key=secret")
                .unwrap();
        let errors = [
            MovieApiError::Unreachable(url.clone()),
            MovieApiError::UnexpectedStatus {
                url: url.clone(),
                status: 401,
            },
            MovieApiError::MissingBody(url.clone()),
        ];

        for error in errors {
            // Act
            let message = error.to_string();

            // Assert
            assert!(!message.contains("secret"), "{message}");
            assert!(message.ends_with("https://api.themoviedb.org/3/search/movie"));
        }

        let kept = MovieApiError::Unreachable(url);
        assert!(matches!(kept, MovieApiError::Unreachable(u) if u.query().is_some()));
    }
}
