//! Mock GitHub events API for exercising the feed client without a network
//!
//! Serves `GET /users/{username}/events` from in-memory fixtures, slicing by
//! `page`/`per_page` and emitting a `Link` header laid out like the real API.
//! Usernames can also be scripted to return a fixed status, body and header.

pub mod fixtures;
pub mod handlers;
pub mod server;

pub use fixtures::{sample_event, EventFixture, ScriptedResponse};
pub use server::{MockServer, RunningMockServer};
