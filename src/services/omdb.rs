//! Remote movie search client
//!
//! A preconfigured HTTP client bound to the OMDb base URL with JSON headers.
//! The endpoint is read-only for this application.

use crate::config::Config;
use crate::model::SearchResponse;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use std::time::Duration;
use thiserror::Error;

/// Why a page could not be fetched
///
/// The UI collapses every variant into a single error flag; the distinction
/// only reaches the log.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server responded with status {0}")]
    Status(reqwest::StatusCode),
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("search rejected: {0}")]
    Rejected(String),
    #[error("fetch worker stopped without a result")]
    Interrupted,
}

/// Anything that can produce one page of search results
pub trait MovieSource: Send + Sync {
    /// Fetch the given 1-based page
    fn search(&self, page: u32) -> Result<SearchResponse, FetchError>;
}

/// OMDb search client
pub struct OmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
    search_term: String,
}

impl OmdbClient {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout_secs.map(Duration::from_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            search_term: config.search_term.clone(),
        })
    }

    /// Query parameters for a page request
    ///
    /// Only the page number varies; the page size is not part of the query.
    fn query(&self, page: u32) -> [(&'static str, String); 3] {
        [
            ("apikey", self.api_key.clone()),
            ("s", self.search_term.clone()),
            ("page", page.to_string()),
        ]
    }
}

impl MovieSource for OmdbClient {
    fn search(&self, page: u32) -> Result<SearchResponse, FetchError> {
        tracing::debug!(page, base_url = %self.base_url, "requesting search page");

        let response = self
            .client
            .get(&self.base_url)
            .query(&self.query(page))
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.text()?;
        parse_search_body(&body)
    }
}

/// Decode a response body, turning `Response: "False"` into an error
pub fn parse_search_body(body: &str) -> Result<SearchResponse, FetchError> {
    let page: SearchResponse = serde_json::from_str(body)?;
    if !page.response {
        let reason = page
            .error
            .unwrap_or_else(|| "no reason given".to_string());
        return Err(FetchError::Rejected(reason));
    }
    Ok(page)
}
