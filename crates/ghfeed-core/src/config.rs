//! Runtime settings for the feed client and session
//!
//! Everything is supplied on the command line; there is no config file and no
//! environment lookup. `FeedConfig::validate` runs before any request is made.

use crate::errors::FeedError;
use reqwest::Url;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_PER_PAGE: u32 = 10;
pub const MAX_PER_PAGE: u32 = 100;
pub const USER_AGENT: &str = concat!("ghfeed/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct FeedConfig {
    pub api_url: String,
    pub per_page: u32,
    pub username: Option<String>,
    pub timeout: Option<Duration>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            per_page: DEFAULT_PER_PAGE,
            username: None,
            timeout: None,
        }
    }
}

impl FeedConfig {
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn validate(&self) -> Result<(), FeedError> {
        let url = Url::parse(&self.api_url)
            .map_err(|e| FeedError::Config(format!("Invalid API URL '{}': {}", self.api_url, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(FeedError::Config(format!(
                "API URL must use http or https, got '{}'",
                url.scheme()
            )));
        }

        if self.per_page == 0 || self.per_page > MAX_PER_PAGE {
            return Err(FeedError::Config(format!(
                "per-page must be between 1 and {}, got {}",
                MAX_PER_PAGE, self.per_page
            )));
        }

        if let Some(username) = &self.username {
            if username.trim().is_empty() {
                return Err(FeedError::Config("username must not be empty".to_string()));
            }
        }

        Ok(())
    }
}
