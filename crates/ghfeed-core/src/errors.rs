//! Error types for fetching and rendering an activity feed
//!
//! Failures fall into two severities. Fatal errors end the interactive session
//! (and the process) immediately; recoverable ones are reported to the user and
//! the prompt loop carries on. `FeedError::is_fatal` is the single place that
//! decides which is which.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Request to the events API failed: {0}")]
    Transport(String),
    #[error("Received status code {status} from {url}")]
    Status { status: u16, url: String },
    #[error("Malformed events response: {0}")]
    MalformedBody(String),
    #[error("Invalid pagination header: {0}")]
    LinkHeader(String),
    #[error("Failed to decode payload of {event_type} event '{event_id}': {source}")]
    PayloadDecode {
        event_id: String,
        event_type: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("I/O error: {0}")]
    Io(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

impl FeedError {
    /// Whether the error ends the session instead of re-prompting.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, FeedError::LinkHeader(_))
    }
}

impl From<std::io::Error> for FeedError {
    fn from(err: std::io::Error) -> Self {
        FeedError::Io(err.to_string())
    }
}

impl From<reqwest::Error> for FeedError {
    fn from(err: reqwest::Error) -> Self {
        FeedError::Transport(err.to_string())
    }
}
