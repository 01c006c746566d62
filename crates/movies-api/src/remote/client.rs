//! `RemoteMovieClient` - movies API client implementation.

use anyhow::{Context, Result, bail};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::instrument;
use url::Url;

use super::api::MovieApi;
use super::endpoint::{DEFAULT_BASE_URL, Endpoint};
use super::error::MovieApiError;
use super::types::{Envelope, MovieDetail, MovieSummary, Video};

/// Movies API client.
///
/// Holds no mutable state; cloning shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct RemoteMovieClient {
    /// HTTP client.
    http_client: Client,
    /// Base URL for API requests (always ends with `/`).
    base_url: Url,
    /// API key sent as the `api_key` query parameter.
    api_key: Option<String>,
}

/// Builder for `RemoteMovieClient`.
#[derive(Debug)]
pub struct RemoteMovieClientBuilder {
    base_url: Option<Url>,
    api_key: Option<String>,
    user_agent: Option<String>,
}

impl RemoteMovieClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
            user_agent: None,
        }
    }

    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the API key appended to every request.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets the User-Agent (required).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - `user_agent` is not set.
    /// - The base URL cannot be a base (e.g. `data:` URLs).
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<RemoteMovieClient> {
        let user_agent = self.user_agent.context("user_agent is required")?;

        let mut base_url = if let Some(url) = self.base_url {
            url
        } else {
            let result = Url::parse(DEFAULT_BASE_URL);
            result.context("invalid default base URL")?
        };
        if base_url.cannot_be_a_base() {
            bail!("base URL cannot be a base: {base_url}");
        }
        // `Url::join` drops the last segment unless the path ends with `/`.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let http_client = Client::builder()
            .user_agent(&user_agent)
            .gzip(true)
            .build()
            .context("failed to build HTTP client")?;

        Ok(RemoteMovieClient {
            http_client,
            base_url,
            api_key: self.api_key,
        })
    }
}

impl RemoteMovieClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> RemoteMovieClientBuilder {
        RemoteMovieClientBuilder::new()
    }

    /// Resolves the URL an operation would request.
    ///
    /// # Errors
    ///
    /// Returns `MovieApiError::InvalidEndpoint` if the URL cannot be built.
    pub fn endpoint_url(&self, endpoint: &Endpoint) -> Result<Url, MovieApiError> {
        endpoint.resolve(&self.base_url, self.api_key.as_deref())
    }

    /// Sends one GET request and classifies the outcome.
    ///
    /// Checks, in order: transport error, HTTP status (exactly 200),
    /// body readability, JSON shape.
    #[instrument(skip_all, fields(endpoint = endpoint.name()))]
    async fn get_json<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<T, MovieApiError> {
        let url = self.endpoint_url(endpoint)?;

        tracing::debug!(path = url.path(), "Movies API request");

        let result = self.http_client.get(url.clone()).send().await;
        let response = result.map_err(|e| {
            tracing::warn!(error = %e.without_url(), path = url.path(), "Movies API unreachable");
            MovieApiError::Unreachable(url.clone())
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::debug!(status = status.as_u16(), "Movies API non-200 response");
            return Err(MovieApiError::UnexpectedStatus {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| {
            tracing::debug!(error = %e.without_url(), "failed to read response body");
            MovieApiError::MissingBody(url.clone())
        })?;

        serde_json::from_slice(&body).map_err(|e| {
            tracing::warn!(error = %e, path = url.path(), "failed to decode JSON response");
            MovieApiError::InvalidResponse
        })
    }

    /// Fetches a `{ results: [...] }` endpoint and unwraps the envelope.
    async fn get_list<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
    ) -> Result<Vec<T>, MovieApiError> {
        let envelope: Envelope<T> = self.get_json(endpoint).await?;
        Ok(envelope.into_results())
    }
}

impl MovieApi for RemoteMovieClient {
    #[instrument(skip_all)]
    async fn fetch_popular(&self) -> Result<Vec<MovieSummary>, MovieApiError> {
        self.get_list(&Endpoint::Popular).await
    }

    #[instrument(skip_all)]
    async fn fetch_upcoming(&self) -> Result<Vec<MovieSummary>, MovieApiError> {
        self.get_list(&Endpoint::Upcoming).await
    }

    #[instrument(skip_all, fields(movie_id = %movie_id))]
    async fn fetch_detail(&self, movie_id: &str) -> Result<MovieDetail, MovieApiError> {
        self.get_json(&Endpoint::Detail(String::from(movie_id)))
            .await
    }

    #[instrument(skip_all, fields(movie_id = %movie_id))]
    async fn fetch_videos(&self, movie_id: &str) -> Result<Vec<Video>, MovieApiError> {
        self.get_list(&Endpoint::Videos(String::from(movie_id)))
            .await
    }

    #[instrument(skip_all, fields(query = %query))]
    async fn search(&self, query: &str) -> Result<Vec<MovieSummary>, MovieApiError> {
        self.get_list(&Endpoint::Search(String::from(query))).await
    }
}
