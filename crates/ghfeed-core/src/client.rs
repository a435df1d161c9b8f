//! HTTP client for a user's public events
//!
//! `EventSource` is the seam the interactive session talks to; `GitHubClient`
//! is the real implementation backed by `reqwest`. Tests plug in their own
//! sources without a network.

use crate::config::{FeedConfig, USER_AGENT};
use crate::errors::FeedError;
use crate::events::Event;
use crate::links::parse_links;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, LINK};
use reqwest::{Client, StatusCode};

/// Position within a paginated result, derived from the `Link` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    pub current: u32,
    pub total: u32,
}

impl PageMeta {
    /// Build metadata from parsed link values for a response to `requested`.
    ///
    /// The API leaves out `next` and `last` on the final page, so zeroes fall
    /// back to the requested page number. A `next` link without `last` means
    /// at least one more page exists.
    pub fn resolve(current: u32, last: u32, requested: u32) -> Self {
        let has_next = current != 0;
        let current = if has_next { current } else { requested };
        let total = match (last, has_next) {
            (0, true) => current.saturating_add(1).max(requested),
            (0, false) => current.max(requested),
            (last, _) => last,
        };
        Self { current, total }
    }

    pub fn contains(&self, page: u32) -> bool {
        (1..=self.total).contains(&page)
    }
}

/// One fetched page of events.
#[derive(Debug, Clone)]
pub struct EventPage {
    pub events: Vec<Event>,
    pub page_meta: Option<PageMeta>,
}

#[async_trait]
pub trait EventSource: Send + Sync {
    /// Fetch one page of `username`'s public events.
    async fn fetch(&self, username: &str, page: u32, per_page: u32) -> Result<EventPage, FeedError>;
}

/// Events API client
pub struct GitHubClient {
    base_url: String,
    client: Client,
}

impl GitHubClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, FeedError> {
        Self::from_config(&FeedConfig::default().with_api_url(base_url))
    }

    pub fn from_config(config: &FeedConfig) -> Result<Self, FeedError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| FeedError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: config.api_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn events_url(&self, username: &str, page: u32, per_page: u32) -> String {
        format!(
            "{}/users/{}/events?page={}&per_page={}",
            self.base_url,
            urlencoding::encode(username),
            page,
            per_page
        )
    }
}

#[async_trait]
impl EventSource for GitHubClient {
    async fn fetch(&self, username: &str, page: u32, per_page: u32) -> Result<EventPage, FeedError> {
        let url = self.events_url(username, page, per_page);
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/vnd.github+json")
            .send()
            .await
            .map_err(|e| FeedError::Transport(format!("GET {} failed: {}", url, e)))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FeedError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let page_meta = match response.headers().get(LINK) {
            Some(value) => {
                let header = value
                    .to_str()
                    .map_err(|e| FeedError::LinkHeader(format!("non-ASCII header value: {}", e)))?;
                if header.is_empty() {
                    None
                } else {
                    let (current, last) = parse_links(header)?;
                    Some(PageMeta::resolve(current, last, page))
                }
            }
            None => None,
        };
        log::debug!("Pagination for page {}: {:?}", page, page_meta);

        let body = response.bytes().await?;
        let events: Vec<Event> = serde_json::from_slice(&body)
            .map_err(|e| FeedError::MalformedBody(e.to_string()))?;
        log::debug!("Decoded {} events", events.len());

        Ok(EventPage { events, page_meta })
    }
}
