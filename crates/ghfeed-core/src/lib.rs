//! Core library for browsing a user's public GitHub activity from a terminal.
//!
//! # Architecture Overview
//!
//! - **Link parsing** (`links`): turns the `Link` pagination header into the current and last page
//! - **Events** (`events`): the event envelope, the sixteen typed payloads and their text rendering
//! - **Client** (`client`): the `EventSource` seam and its `reqwest` implementation
//! - **Session** (`session`): the interactive prompt loop that ties the pieces together
//! - **Configuration** (`config`): command-line supplied settings and their validation

pub mod client;
pub mod config;
pub mod errors;
pub mod events;
pub mod links;
pub mod session;

pub use client::{EventPage, EventSource, GitHubClient, PageMeta};
pub use config::FeedConfig;
pub use errors::FeedError;
pub use events::{print_events, Event, EventPayload, EventType};
pub use links::parse_links;
pub use session::{Session, Step};
