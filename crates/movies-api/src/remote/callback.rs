//! `CallbackClient` - completion-callback adapter over `MovieApi`.
//!
//! Each call spawns one task on the ambient tokio runtime and returns its
//! `JoinHandle` right away. The callback runs on that task, at most once,
//! and the handle yields whether it ran.
//! Whether it runs for non-200, unreadable-body, and unbuildable-endpoint
//! outcomes is decided by [`UnresolvedPolicy`].

use std::sync::Arc;

use tokio::task::JoinHandle;

use super::api::MovieApi;
use super::client::RemoteMovieClient;
use super::error::MovieApiError;
use super::types::{MovieDetail, MovieSummary, Video};

/// Treatment of outcomes for which [`MovieApiError::is_unresolved`] holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnresolvedPolicy {
    /// Never invoke the callback; log a warning instead.
    ///
    /// Mirrors the legacy data source, whose callers can wait forever.
    #[default]
    Drop,
    /// Invoke the callback with the error like any other failure.
    Deliver,
}

/// Callback-style front end for a [`MovieApi`] implementation.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct CallbackClient<A = RemoteMovieClient> {
    /// Shared API implementation.
    api: Arc<A>,
    /// Unresolved-outcome policy.
    policy: UnresolvedPolicy,
}

impl<A> Clone for CallbackClient<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            policy: self.policy,
        }
    }
}

impl<A> CallbackClient<A>
where
    A: MovieApi + Send + Sync + 'static,
{
    /// Wraps `api` with the default [`UnresolvedPolicy::Drop`].
    pub fn new(api: A) -> Self {
        Self::from_shared(Arc::new(api))
    }

    /// Wraps an already shared `api`.
    #[must_use]
    pub fn from_shared(api: Arc<A>) -> Self {
        Self {
            api,
            policy: UnresolvedPolicy::default(),
        }
    }

    /// Sets the unresolved-outcome policy.
    #[must_use]
    pub fn with_policy(mut self, policy: UnresolvedPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Current unresolved-outcome policy.
    #[must_use]
    pub const fn policy(&self) -> UnresolvedPolicy {
        self.policy
    }

    /// Fetches popular movies and reports through `callback`.
    ///
    /// The handle resolves to `true` if `callback` ran.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn fetch_popular<F>(&self, callback: F) -> JoinHandle<bool>
    where
        F: FnOnce(Result<Vec<MovieSummary>, MovieApiError>) + Send + 'static,
    {
        let api = Arc::clone(&self.api);
        let policy = self.policy;
        tokio::spawn(async move {
            let outcome = api.fetch_popular().await;
            deliver(policy, "popular", outcome, callback)
        })
    }

    /// Fetches upcoming movies and reports through `callback`.
    ///
    /// The handle resolves to `true` if `callback` ran.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn fetch_upcoming<F>(&self, callback: F) -> JoinHandle<bool>
    where
        F: FnOnce(Result<Vec<MovieSummary>, MovieApiError>) + Send + 'static,
    {
        let api = Arc::clone(&self.api);
        let policy = self.policy;
        tokio::spawn(async move {
            let outcome = api.fetch_upcoming().await;
            deliver(policy, "upcoming", outcome, callback)
        })
    }

    /// Fetches one movie's details and reports through `callback`.
    ///
    /// The handle resolves to `true` if `callback` ran.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn fetch_detail<F>(&self, movie_id: impl Into<String>, callback: F) -> JoinHandle<bool>
    where
        F: FnOnce(Result<MovieDetail, MovieApiError>) + Send + 'static,
    {
        let api = Arc::clone(&self.api);
        let policy = self.policy;
        let movie_id = movie_id.into();
        tokio::spawn(async move {
            let outcome = api.fetch_detail(&movie_id).await;
            deliver(policy, "detail", outcome, callback)
        })
    }

    /// Fetches one movie's videos and reports through `callback`.
    ///
    /// The handle resolves to `true` if `callback` ran.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn fetch_videos<F>(&self, movie_id: impl Into<String>, callback: F) -> JoinHandle<bool>
    where
        F: FnOnce(Result<Vec<Video>, MovieApiError>) + Send + 'static,
    {
        let api = Arc::clone(&self.api);
        let policy = self.policy;
        let movie_id = movie_id.into();
        tokio::spawn(async move {
            let outcome = api.fetch_videos(&movie_id).await;
            deliver(policy, "videos", outcome, callback)
        })
    }

    /// Searches movies and reports through `callback`.
    ///
    /// The handle resolves to `true` if `callback` ran.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn search<F>(&self, query: impl Into<String>, callback: F) -> JoinHandle<bool>
    where
        F: FnOnce(Result<Vec<MovieSummary>, MovieApiError>) + Send + 'static,
    {
        let api = Arc::clone(&self.api);
        let policy = self.policy;
        let query = query.into();
        tokio::spawn(async move {
            let outcome = api.search(&query).await;
            deliver(policy, "search", outcome, callback)
        })
    }
}

/// Hands `outcome` to `callback` unless `policy` drops it.
///
/// Returns whether the callback was invoked.
fn deliver<T, F>(
    policy: UnresolvedPolicy,
    operation: &'static str,
    outcome: Result<T, MovieApiError>,
    callback: F,
) -> bool
where
    F: FnOnce(Result<T, MovieApiError>),
{
    match outcome {
        Err(err) if policy == UnresolvedPolicy::Drop && err.is_unresolved() => {
            tracing::warn!(operation, error = %err, "Outcome dropped, callback not invoked");
            false
        }
        outcome => {
            callback(outcome);
            true
        }
    }
}
