//! Actor search service - free-text actor lookup with thumbnail fan-out
//!
//! Turns a query into an ordered list of display-ready candidates:
//! one free-text search against the source, then one thumbnail lookup per
//! hit, all issued concurrently and joined before the result list is
//! touched. Aggregation is all-or-nothing: a failed search leaves the
//! previous results in place, while a failed or missing thumbnail only
//! degrades that single candidate to the placeholder image.

use std::sync::Arc;

use futures_util::future::join_all;
use once_cell::sync::Lazy;
use regex_lite::Regex;
use tracing::{debug, warn};

use fancast_domain::ActorCandidate;
use fancast_ports::outbound::{ActorSourcePort, SourceError};

/// Maximum number of candidates surfaced per search
pub const MAX_CANDIDATES: usize = 5;

/// Image path used when the source has no thumbnail for a hit
pub const PLACEHOLDER_IMAGE: &str = "/api/placeholder/300/400";

/// Matches any `<...>` span, including an unterminated one at end of input.
static TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"</?[^>]+(>|$)").expect("tag pattern is valid"));

/// Search pipeline and owner of the transient result list.
///
/// `search` takes `&mut self`, so a session cannot start a second search
/// while one is in flight; the result list is only ever replaced at the
/// aggregation barrier.
pub struct ActorSearchService {
    source: Arc<dyn ActorSourcePort>,
    results: Vec<ActorCandidate>,
    is_searching: bool,
}

impl ActorSearchService {
    /// Create a new service over the given source.
    pub fn new(source: Arc<dyn ActorSourcePort>) -> Self {
        Self {
            source,
            results: Vec::new(),
            is_searching: false,
        }
    }

    /// Current candidates, in the source's relevance order.
    pub fn results(&self) -> &[ActorCandidate] {
        &self.results
    }

    /// Whether a search is currently in flight.
    pub fn is_searching(&self) -> bool {
        self.is_searching
    }

    /// Discard the current candidates (picker dismissed or navigation).
    pub fn clear_results(&mut self) {
        self.results.clear();
    }

    /// Take the candidate at `index`, discarding the rest of the list.
    ///
    /// Returns `None` and leaves the list untouched if `index` is out of
    /// range. Candidates are transient, so picking one closes the picker.
    pub fn select(&mut self, index: usize) -> Option<ActorCandidate> {
        if index >= self.results.len() {
            return None;
        }
        let candidate = self.results.swap_remove(index);
        self.results.clear();
        Some(candidate)
    }

    /// Run a search and replace the result list with up to
    /// [`MAX_CANDIDATES`] candidates.
    ///
    /// An empty query is a no-op: no request is issued and the in-progress
    /// flag is never raised. Any search failure is absorbed here - the
    /// previous results stay visible and the failure is only logged.
    pub async fn search(&mut self, query: &str) {
        if query.is_empty() {
            return;
        }

        self.is_searching = true;
        match self.fetch_candidates(query).await {
            Ok(candidates) => self.results = candidates,
            Err(e) => warn!(query, error = %e, "actor search failed, keeping previous results"),
        }
        self.is_searching = false;
    }

    async fn fetch_candidates(&self, query: &str) -> Result<Vec<ActorCandidate>, SourceError> {
        let hits = self.source.search(&format!("{query} actor")).await?;

        // Independent per-hit lookups; join_all preserves hit order no
        // matter which thumbnail resolves first.
        let lookups = hits.into_iter().take(MAX_CANDIDATES).map(|hit| {
            let source = Arc::clone(&self.source);
            async move {
                let image = match source.thumbnail(&hit.title).await {
                    Ok(Some(url)) => url,
                    Ok(None) => PLACEHOLDER_IMAGE.to_string(),
                    Err(e) => {
                        debug!(title = %hit.title, error = %e, "thumbnail lookup failed, using placeholder");
                        PLACEHOLDER_IMAGE.to_string()
                    }
                };
                ActorCandidate {
                    description: strip_tags(&hit.snippet),
                    name: hit.title,
                    image,
                }
            }
        });

        Ok(join_all(lookups).await)
    }
}

/// Remove every markup tag span from a search snippet.
fn strip_tags(snippet: &str) -> String {
    TAG_PATTERN.replace_all(snippet, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fancast_ports::outbound::{MockActorSourcePort, SearchHit};

    fn hit(title: &str, snippet: &str) -> SearchHit {
        SearchHit {
            title: title.to_string(),
            snippet: snippet.to_string(),
        }
    }

    fn service_with(mock: MockActorSourcePort) -> ActorSearchService {
        ActorSearchService::new(Arc::new(mock))
    }

    #[test]
    fn strip_tags_removes_markup_spans() {
        assert_eq!(strip_tags("<b>Viggo</b> Mortensen"), "Viggo Mortensen");
        assert_eq!(
            strip_tags(r#"<span class="searchmatch">Hugo</span> Weaving"#),
            "Hugo Weaving"
        );
        assert_eq!(strip_tags("plain text"), "plain text");
        // Unterminated trailing tag is dropped too.
        assert_eq!(strip_tags("Ian McKellen <span class=\"x"), "Ian McKellen ");
    }

    #[tokio::test]
    async fn empty_query_issues_no_request() {
        let mut mock = MockActorSourcePort::new();
        mock.expect_search().times(0);
        mock.expect_thumbnail().times(0);

        let mut service = service_with(mock);
        service.search("").await;

        assert!(service.results().is_empty());
        assert!(!service.is_searching());
    }

    #[tokio::test]
    async fn appends_actor_to_the_query_and_caps_at_five() {
        let mut mock = MockActorSourcePort::new();
        mock.expect_search()
            .withf(|q| q == "Hugo Weaving actor")
            .returning(|_| {
                Ok((1..=6)
                    .map(|i| hit(&format!("Actor {i}"), &format!("snippet {i}")))
                    .collect())
            });
        mock.expect_thumbnail()
            .times(5)
            .returning(|title| Ok(Some(format!("https://img.example/{title}.jpg"))));

        let mut service = service_with(mock);
        service.search("Hugo Weaving").await;

        let names: Vec<&str> = service.results().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            ["Actor 1", "Actor 2", "Actor 3", "Actor 4", "Actor 5"]
        );
        assert_eq!(
            service.results()[0].image,
            "https://img.example/Actor 1.jpg"
        );
        assert!(!service.is_searching());
    }

    #[tokio::test]
    async fn missing_or_failing_thumbnail_degrades_to_placeholder() {
        let mut mock = MockActorSourcePort::new();
        mock.expect_search().returning(|_| {
            Ok(vec![
                hit("Hugo Weaving", "s"),
                hit("Hugo Speer", "s"),
                hit("Hugo Silva", "s"),
            ])
        });
        mock.expect_thumbnail().returning(|title| match title {
            "Hugo Weaving" => Ok(Some("https://img.example/hw.jpg".to_string())),
            "Hugo Speer" => Ok(None),
            _ => Err(SourceError::RequestFailed("timeout".to_string())),
        });

        let mut service = service_with(mock);
        service.search("Hugo").await;

        let images: Vec<&str> = service.results().iter().map(|c| c.image.as_str()).collect();
        assert_eq!(
            images,
            [
                "https://img.example/hw.jpg",
                PLACEHOLDER_IMAGE,
                PLACEHOLDER_IMAGE
            ]
        );
    }

    #[tokio::test]
    async fn failed_search_keeps_previous_results() {
        let mut mock = MockActorSourcePort::new();
        mock.expect_search()
            .times(1)
            .returning(|_| Ok(vec![hit("Hugo Weaving", "snippet")]));
        mock.expect_search()
            .returning(|_| Err(SourceError::RequestFailed("503".to_string())));
        mock.expect_thumbnail().returning(|_| Ok(None));

        let mut service = service_with(mock);
        service.search("Hugo Weaving").await;
        assert_eq!(service.results().len(), 1);

        service.search("Cate Blanchett").await;

        // Stale list retained, flag cleared.
        assert_eq!(service.results().len(), 1);
        assert_eq!(service.results()[0].name, "Hugo Weaving");
        assert!(!service.is_searching());
    }

    #[tokio::test]
    async fn snippets_are_stripped_of_markup() {
        let mut mock = MockActorSourcePort::new();
        mock.expect_search().returning(|_| {
            Ok(vec![hit(
                "Viggo Mortensen",
                "<b>Viggo</b> Mortensen is an actor",
            )])
        });
        mock.expect_thumbnail().returning(|_| Ok(None));

        let mut service = service_with(mock);
        service.search("Viggo").await;

        assert_eq!(
            service.results()[0].description,
            "Viggo Mortensen is an actor"
        );
    }

    #[tokio::test]
    async fn select_returns_the_candidate_and_clears_the_list() {
        let mut mock = MockActorSourcePort::new();
        mock.expect_search().returning(|_| {
            Ok((1..=5)
                .map(|i| hit(&format!("Actor {i}"), "s"))
                .collect())
        });
        mock.expect_thumbnail().returning(|_| Ok(None));

        let mut service = service_with(mock);
        service.search("Hugo Weaving").await;

        let picked = service.select(2).expect("candidate at index 2");
        assert_eq!(picked.name, "Actor 3");
        assert!(service.results().is_empty());
    }

    #[tokio::test]
    async fn select_out_of_range_is_a_no_op() {
        let mut mock = MockActorSourcePort::new();
        mock.expect_search()
            .returning(|_| Ok(vec![hit("Actor 1", "s")]));
        mock.expect_thumbnail().returning(|_| Ok(None));

        let mut service = service_with(mock);
        service.search("Hugo").await;

        assert!(service.select(7).is_none());
        assert_eq!(service.results().len(), 1);
    }
}
