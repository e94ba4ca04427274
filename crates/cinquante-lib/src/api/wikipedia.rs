//! Encyclopedia (MediaWiki) API client
//!
//! Two operations back the verification chain: full-text search resolving a
//! free-text guess to its top `Candidate`, and the pageprops lookup mapping a
//! page id to its structured-data entity key.

use crate::primitives::{Candidate, EntityKey};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use thiserror::Error;
use tracing::trace;

/// Characters that must not appear raw in a query-string value
const QUERY: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'&')
    .add(b'+')
    .add(b'?');

/// Encyclopedia API errors
#[derive(Debug, Error)]
pub enum WikipediaError {
    #[error("HTTP request failed: {source}")]
    RequestFailed {
        #[from]
        source: reqwest::Error,
    },

    #[error("JSON parsing failed: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },

    #[error("No mock response for: {request}")]
    UnscriptedRequest { request: String },
}

/// Search response: `query.search` holds hits ranked by relevance
#[derive(Debug, Deserialize)]
struct SearchResponse {
    query: Option<SearchQuery>,
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    title: String,
    pageid: u64,
}

/// Pageprops response: `query.pages` is keyed by page id
#[derive(Debug, Deserialize)]
struct PagesResponse {
    query: Option<PagesQuery>,
}

#[derive(Debug, Deserialize)]
struct PagesQuery {
    pages: HashMap<String, PageInfo>,
}

#[derive(Debug, Deserialize)]
struct PageInfo {
    pageprops: Option<PageProps>,
}

#[derive(Debug, Deserialize)]
struct PageProps {
    wikibase_item: Option<String>,
}

/// Parse a search response body into its top candidate
pub(crate) fn parse_top_candidate(body: &str) -> Result<Option<Candidate>, WikipediaError> {
    let response: SearchResponse = serde_json::from_str(body)?;
    Ok(response
        .query
        .map(|q| q.search)
        .unwrap_or_default()
        .into_iter()
        .next()
        .map(|hit| Candidate {
            title: hit.title,
            page_id: hit.pageid,
        }))
}

/// Parse a pageprops response body into the page's entity key
pub(crate) fn parse_wikibase_item(
    body: &str,
    page_id: u64,
) -> Result<Option<EntityKey>, WikipediaError> {
    let response: PagesResponse = serde_json::from_str(body)?;
    let key = page_id.to_string();
    Ok(response
        .query
        .and_then(|mut q| q.pages.remove(&key))
        .and_then(|page| page.pageprops)
        .and_then(|props| props.wikibase_item)
        .map(EntityKey))
}

/// Trait for encyclopedia operations
pub trait WikipediaClient {
    /// Top full-text search result for a free-text query, if any
    fn search_top(
        &self,
        query: &str,
    ) -> impl std::future::Future<Output = Result<Option<Candidate>, WikipediaError>> + Send;

    /// Structured-data entity key for an encyclopedia page, if mapped
    fn wikibase_item(
        &self,
        page_id: u64,
    ) -> impl std::future::Future<Output = Result<Option<EntityKey>, WikipediaError>> + Send;

    /// Public page URL for a canonical title
    fn page_url(&self, title: &str) -> String;
}

/// Live encyclopedia client (production)
pub struct LiveWikipediaClient {
    client: Client,
    api_base: String,
    article_base: String,
}

impl LiveWikipediaClient {
    /// Create a client against the given language edition
    pub fn new(client: Client, language: &str) -> Self {
        Self {
            client,
            api_base: format!("https://{language}.wikipedia.org/w/api.php"),
            article_base: format!("https://{language}.wikipedia.org/wiki"),
        }
    }

    /// Create a client with custom base URLs (for testing)
    pub fn with_base_urls(client: Client, api_base: String, article_base: String) -> Self {
        Self {
            client,
            api_base,
            article_base,
        }
    }

    async fn get(&self, url: &str) -> Result<String, WikipediaError> {
        let response = self
            .client
            .get(url)
            .header("User-Agent", super::USER_AGENT)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.text().await?)
    }
}

impl WikipediaClient for LiveWikipediaClient {
    async fn search_top(&self, query: &str) -> Result<Option<Candidate>, WikipediaError> {
        let url = format!(
            "{}?action=query&list=search&srsearch={}&format=json",
            self.api_base,
            utf8_percent_encode(query, QUERY)
        );

        trace!("Search URL: {}", url);

        parse_top_candidate(&self.get(&url).await?)
    }

    async fn wikibase_item(&self, page_id: u64) -> Result<Option<EntityKey>, WikipediaError> {
        let url = format!(
            "{}?action=query&prop=pageprops&ppprop=wikibase_item&pageids={}&format=json",
            self.api_base, page_id
        );

        trace!("Pageprops URL: {}", url);

        parse_wikibase_item(&self.get(&url).await?, page_id)
    }

    fn page_url(&self, title: &str) -> String {
        let slug = title.replace(' ', "_");
        format!(
            "{}/{}",
            self.article_base,
            utf8_percent_encode(&slug, QUERY)
        )
    }
}

/// Mock encyclopedia client (testing)
///
/// Scripted responses keyed by query / page id, with call counters so tests
/// can assert how far the verification chain got.
pub struct MockWikipediaClient {
    search_responses: Mutex<HashMap<String, Option<Candidate>>>,
    item_responses: Mutex<HashMap<u64, Option<EntityKey>>>,
    search_calls: AtomicUsize,
    item_calls: AtomicUsize,
    article_base: String,
}

impl MockWikipediaClient {
    pub fn new() -> Self {
        Self {
            search_responses: Mutex::new(HashMap::new()),
            item_responses: Mutex::new(HashMap::new()),
            search_calls: AtomicUsize::new(0),
            item_calls: AtomicUsize::new(0),
            article_base: "https://fr.wikipedia.org/wiki".to_string(),
        }
    }

    /// Script a search result for a query
    pub fn with_search_result(self, query: &str, result: Option<Candidate>) -> Self {
        self.search_responses
            .lock()
            .unwrap()
            .insert(query.to_string(), result);
        self
    }

    /// Script an entity-key lookup for a page id
    pub fn with_wikibase_item(self, page_id: u64, result: Option<EntityKey>) -> Self {
        self.item_responses
            .lock()
            .unwrap()
            .insert(page_id, result);
        self
    }

    pub fn search_call_count(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub fn item_call_count(&self) -> usize {
        self.item_calls.load(Ordering::SeqCst)
    }
}

impl WikipediaClient for MockWikipediaClient {
    async fn search_top(&self, query: &str) -> Result<Option<Candidate>, WikipediaError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);

        match self.search_responses.lock().unwrap().get(query) {
            Some(result) => Ok(result.clone()),
            None => Err(WikipediaError::UnscriptedRequest {
                request: format!("search: {query}"),
            }),
        }
    }

    async fn wikibase_item(&self, page_id: u64) -> Result<Option<EntityKey>, WikipediaError> {
        self.item_calls.fetch_add(1, Ordering::SeqCst);

        match self.item_responses.lock().unwrap().get(&page_id) {
            Some(result) => Ok(result.clone()),
            None => Err(WikipediaError::UnscriptedRequest {
                request: format!("wikibase_item: {page_id}"),
            }),
        }
    }

    fn page_url(&self, title: &str) -> String {
        let slug = title.replace(' ', "_");
        format!(
            "{}/{}",
            self.article_base,
            utf8_percent_encode(&slug, QUERY)
        )
    }
}

impl Default for MockWikipediaClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    include!("wikipedia.test.rs");
}
