//! Wikipedia actor source adapter
//!
//! Implements `ActorSourcePort` against Wikipedia's public `api.php`
//! endpoints: `list=search` for free-text hits and `prop=pageimages` for
//! per-title thumbnails. Thumbnail responses are parsed leniently - any
//! missing field means "no thumbnail", never a hard failure.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use fancast_ports::outbound::{ActorSourcePort, SearchHit, SourceError};

/// Default Wikipedia API endpoint.
pub const DEFAULT_WIKIPEDIA_API_URL: &str = "https://en.wikipedia.org/w/api.php";

/// Transport-level timeout; the core itself specifies none.
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Client for Wikipedia's search and pageimages APIs.
#[derive(Clone)]
pub struct WikipediaClient {
    client: Client,
    api_url: String,
}

impl WikipediaClient {
    pub fn new(api_url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for WikipediaClient {
    fn default() -> Self {
        Self::new(DEFAULT_WIKIPEDIA_API_URL)
    }
}

#[async_trait]
impl ActorSourcePort for WikipediaClient {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, SourceError> {
        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("action", "query"),
                ("list", "search"),
                ("srsearch", query),
                ("format", "json"),
                ("origin", "*"),
            ])
            .send()
            .await
            .map_err(|e| SourceError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SourceError::RequestFailed(format!(
                "search returned {}",
                response.status()
            )));
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| SourceError::InvalidResponse(e.to_string()))?;

        Ok(hits_from(body))
    }

    async fn thumbnail(&self, title: &str) -> Result<Option<String>, SourceError> {
        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("action", "query"),
                ("titles", title),
                ("prop", "pageimages"),
                ("format", "json"),
                ("pithumbsize", "300"),
                ("origin", "*"),
            ])
            .send()
            .await
            .map_err(|e| SourceError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SourceError::RequestFailed(format!(
                "pageimages returned {}",
                response.status()
            )));
        }

        // Shape deviations on this endpoint degrade to "no thumbnail".
        match response.json::<PagesResponse>().await {
            Ok(body) => Ok(first_thumbnail(body)),
            Err(_) => Ok(None),
        }
    }
}

// =============================================================================
// Wire format
// =============================================================================

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    query: Option<SearchQuery>,
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    search: Vec<RawHit>,
}

#[derive(Debug, Deserialize)]
struct RawHit {
    title: String,
    #[serde(default)]
    snippet: String,
}

#[derive(Debug, Deserialize)]
struct PagesResponse {
    #[serde(default)]
    query: Option<PagesQuery>,
}

#[derive(Debug, Deserialize)]
struct PagesQuery {
    #[serde(default)]
    pages: HashMap<String, Page>,
}

#[derive(Debug, Deserialize)]
struct Page {
    #[serde(default)]
    thumbnail: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    source: String,
}

fn hits_from(response: SearchResponse) -> Vec<SearchHit> {
    response
        .query
        .map(|q| q.search)
        .unwrap_or_default()
        .into_iter()
        .map(|hit| SearchHit {
            title: hit.title,
            snippet: hit.snippet,
        })
        .collect()
}

/// The pages map is keyed by page id and normally holds a single entry.
fn first_thumbnail(response: PagesResponse) -> Option<String> {
    response
        .query?
        .pages
        .into_values()
        .find_map(|page| page.thumbnail)
        .map(|thumbnail| thumbnail.source)
}
