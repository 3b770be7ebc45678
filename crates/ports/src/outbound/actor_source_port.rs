//! Actor source port - Interface to the external biographical source
//!
//! The search pipeline needs two operations from the source: a free-text
//! page search and a per-title thumbnail lookup. The shipped adapter talks
//! to Wikipedia's public API; tests use the generated mock.

use async_trait::async_trait;
use thiserror::Error;

/// One hit from the free-text search, in the source's relevance order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    /// Page title (the actor's name)
    pub title: String,
    /// Match snippet; may contain markup tags
    pub snippet: String,
}

/// Errors surfaced by the actor source.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// Network or HTTP failure
    #[error("request failed: {0}")]
    RequestFailed(String),
    /// Response body could not be interpreted
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Port for querying the external biographical source.
///
/// A missing thumbnail is `Ok(None)`, never an error: response-shape
/// deviations on the image endpoint must degrade, not fail (the service
/// substitutes a placeholder). Only the search call itself may abort a
/// pipeline run.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ActorSourcePort: Send + Sync {
    /// Free-text page search; hits are returned in relevance order.
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, SourceError>;

    /// Representative thumbnail URL for an exact page title, if any.
    async fn thumbnail(&self, title: &str) -> Result<Option<String>, SourceError>;
}
