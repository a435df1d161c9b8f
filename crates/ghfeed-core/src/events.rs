//! Activity feed events: wire envelope, typed payloads and text rendering
//!
//! Every event arrives as the same envelope, a `type` discriminant plus an
//! untyped `payload` object. `Event::decode_payload` maps the discriminant to
//! exactly one payload struct and deserializes the payload value straight into
//! it. `EventPayload::render` then turns the typed payload into the text shown
//! to the user. Event types outside the known set are skipped without error.

use crate::errors::FeedError;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;
use std::io::Write;

/// `January 2, 2006 at 3:04 PM UTC`
pub const TIMESTAMP_FORMAT: &str = "%B %-d, %Y at %-I:%M %p UTC";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum EventType {
    Watch,
    CommitComment,
    Create,
    Delete,
    Fork,
    Gollum,
    IssueComment,
    Issues,
    Member,
    Public,
    PullRequest,
    PullRequestReview,
    PullRequestReviewComment,
    PullRequestReviewThread,
    Push,
    Release,
    Unknown(String),
}

impl EventType {
    pub fn as_str(&self) -> &str {
        match self {
            EventType::Watch => "WatchEvent",
            EventType::CommitComment => "CommitCommentEvent",
            EventType::Create => "CreateEvent",
            EventType::Delete => "DeleteEvent",
            EventType::Fork => "ForkEvent",
            EventType::Gollum => "GollumEvent",
            EventType::IssueComment => "IssueCommentEvent",
            EventType::Issues => "IssuesEvent",
            EventType::Member => "MemberEvent",
            EventType::Public => "PublicEvent",
            EventType::PullRequest => "PullRequestEvent",
            EventType::PullRequestReview => "PullRequestReviewEvent",
            EventType::PullRequestReviewComment => "PullRequestReviewCommentEvent",
            EventType::PullRequestReviewThread => "PullRequestReviewThreadEvent",
            EventType::Push => "PushEvent",
            EventType::Release => "ReleaseEvent",
            EventType::Unknown(name) => name,
        }
    }
}

impl From<String> for EventType {
    fn from(name: String) -> Self {
        match name.as_str() {
            "WatchEvent" => EventType::Watch,
            "CommitCommentEvent" => EventType::CommitComment,
            "CreateEvent" => EventType::Create,
            "DeleteEvent" => EventType::Delete,
            "ForkEvent" => EventType::Fork,
            "GollumEvent" => EventType::Gollum,
            "IssueCommentEvent" => EventType::IssueComment,
            "IssuesEvent" => EventType::Issues,
            "MemberEvent" => EventType::Member,
            "PublicEvent" => EventType::Public,
            "PullRequestEvent" => EventType::PullRequest,
            "PullRequestReviewEvent" => EventType::PullRequestReview,
            "PullRequestReviewCommentEvent" => EventType::PullRequestReviewComment,
            "PullRequestReviewThreadEvent" => EventType::PullRequestReviewThread,
            "PushEvent" => EventType::Push,
            "ReleaseEvent" => EventType::Release,
            _ => EventType::Unknown(name),
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Actor {
    #[serde(deserialize_with = "null_as_default")]
    pub login: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EventRepo {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

/// Event envelope as returned by `GET /users/{username}/events`.
#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    pub id: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub actor: Actor,
    #[serde(default, deserialize_with = "null_as_default")]
    pub repo: EventRepo,
    #[serde(default)]
    pub payload: Value,
    pub created_at: DateTime<Utc>,
}

// Shared payload fragments

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Comment {
    #[serde(deserialize_with = "null_as_default")]
    pub body: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Issue {
    #[serde(deserialize_with = "null_as_default")]
    pub number: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PullRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub number: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(deserialize_with = "null_as_default")]
    pub login: String,
}

// Per-type payloads

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WatchPayload {
    #[serde(deserialize_with = "null_as_default")]
    pub action: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CommitCommentPayload {
    #[serde(deserialize_with = "null_as_default")]
    pub action: String,
    #[serde(deserialize_with = "null_as_default")]
    pub comment: Comment,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreatePayload {
    #[serde(rename = "ref")]
    pub git_ref: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub ref_type: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DeletePayload {
    #[serde(deserialize_with = "null_as_default")]
    pub ref_type: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Forkee {
    #[serde(deserialize_with = "null_as_default")]
    pub full_name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ForkPayload {
    #[serde(deserialize_with = "null_as_default")]
    pub forkee: Forkee,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GollumPage {
    #[serde(deserialize_with = "null_as_default")]
    pub page_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub action: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GollumPayload {
    #[serde(deserialize_with = "null_as_default")]
    pub pages: Vec<GollumPage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct IssueCommentPayload {
    #[serde(deserialize_with = "null_as_default")]
    pub action: String,
    #[serde(deserialize_with = "null_as_default")]
    pub issue: Issue,
    #[serde(deserialize_with = "null_as_default")]
    pub comment: Comment,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct IssuesPayload {
    #[serde(deserialize_with = "null_as_default")]
    pub action: String,
    #[serde(deserialize_with = "null_as_default")]
    pub issue: Issue,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MemberPayload {
    #[serde(deserialize_with = "null_as_default")]
    pub action: String,
    #[serde(deserialize_with = "null_as_default")]
    pub member: User,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PullRequestPayload {
    #[serde(deserialize_with = "null_as_default")]
    pub action: String,
    #[serde(deserialize_with = "null_as_default")]
    pub number: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub pull_request: PullRequest,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PullRequestReviewPayload {
    #[serde(deserialize_with = "null_as_default")]
    pub action: String,
    #[serde(deserialize_with = "null_as_default")]
    pub pull_request: PullRequest,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PullRequestReviewCommentPayload {
    #[serde(deserialize_with = "null_as_default")]
    pub action: String,
    #[serde(deserialize_with = "null_as_default")]
    pub pull_request: PullRequest,
    #[serde(deserialize_with = "null_as_default")]
    pub comment: Comment,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PullRequestReviewThreadPayload {
    #[serde(deserialize_with = "null_as_default")]
    pub action: String,
    #[serde(deserialize_with = "null_as_default")]
    pub pull_request: PullRequest,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PushPayload {
    #[serde(deserialize_with = "null_as_default")]
    pub size: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Release {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReleasePayload {
    #[serde(deserialize_with = "null_as_default")]
    pub action: String,
    #[serde(deserialize_with = "null_as_default")]
    pub release: Release,
}

/// Typed payload, one variant per known event type.
#[derive(Debug, Clone)]
pub enum EventPayload {
    Watch(WatchPayload),
    CommitComment(CommitCommentPayload),
    Create(CreatePayload),
    Delete(DeletePayload),
    Fork(ForkPayload),
    Gollum(GollumPayload),
    IssueComment(IssueCommentPayload),
    Issues(IssuesPayload),
    Member(MemberPayload),
    Public,
    PullRequest(PullRequestPayload),
    PullRequestReview(PullRequestReviewPayload),
    PullRequestReviewComment(PullRequestReviewCommentPayload),
    PullRequestReviewThread(PullRequestReviewThreadPayload),
    Push(PushPayload),
    Release(ReleasePayload),
}

impl EventPayload {
    /// Render the payload as one or more lines, without the timestamp prefix.
    pub fn render(&self, repo: &str) -> String {
        match self {
            EventPayload::Watch(p) => format!("{} watching for repo {}", p.action, repo),
            EventPayload::CommitComment(p) => format!(
                "{} a comment on commit '{}' in repo {}",
                p.action, p.comment.body, repo
            ),
            EventPayload::Create(p) => match p.ref_type.as_str() {
                "branch" | "tag" => format!(
                    "created {} {} in repo {}",
                    p.ref_type,
                    p.git_ref.as_deref().unwrap_or_default(),
                    repo
                ),
                "repository" => format!("created repository {}", repo),
                _ => "created ".to_string(),
            },
            EventPayload::Delete(p) => format!("deleted {} in repo {}", p.ref_type, repo),
            EventPayload::Fork(p) => format!("forked {} to {}", p.forkee.full_name, repo),
            EventPayload::Gollum(p) => {
                let mut lines = vec![format!("created/updated following pages in repo {}:", repo)];
                lines.extend(
                    p.pages
                        .iter()
                        .map(|page| format!("{} page {}", page.action, page.page_name)),
                );
                lines.join("\n")
            }
            EventPayload::IssueComment(p) => format!(
                "{} a comment on issue #{} '{}' in repo {}:\n'{}'",
                p.action, p.issue.number, p.issue.title, repo, p.comment.body
            ),
            EventPayload::Issues(p) => format!(
                "{} issue #{} '{}' '{}' in repo {}",
                p.action, p.issue.number, p.issue.title, p.issue.title, repo
            ),
            EventPayload::Member(p) => format!("{} {} in repo {}", p.action, p.member.login, repo),
            EventPayload::Public => format!("made repo {} public", repo),
            EventPayload::PullRequest(PullRequestPayload {
                action, pull_request, ..
            })
            | EventPayload::PullRequestReview(PullRequestReviewPayload {
                action,
                pull_request,
            }) => format!(
                "{} pull request #{} '{}' in repo {}",
                action, pull_request.number, pull_request.title, repo
            ),
            EventPayload::PullRequestReviewComment(p) => format!(
                "{} a comment on pull request #{} '{}' in repo {}:\n'{}'",
                p.action, p.pull_request.number, p.pull_request.title, repo, p.comment.body
            ),
            EventPayload::PullRequestReviewThread(p) => format!(
                "{} pull request review thread #{} '{}' in repo {}",
                p.action, p.pull_request.number, p.pull_request.title, repo
            ),
            EventPayload::Push(p) => {
                let noun = if p.size == 1 { "commit" } else { "commits" };
                format!("pushed {} {} to repo {}", p.size, noun, repo)
            }
            EventPayload::Release(p) => format!(
                "{} release {} in repo {}",
                p.action,
                p.release.name.as_deref().unwrap_or_default(),
                repo
            ),
        }
    }
}

impl Event {
    /// Decode the payload into the shape selected by `type`.
    ///
    /// Returns `Ok(None)` for event types outside the known set.
    pub fn decode_payload(&self) -> Result<Option<EventPayload>, FeedError> {
        let payload = match &self.event_type {
            EventType::Watch => EventPayload::Watch(self.decode()?),
            EventType::CommitComment => EventPayload::CommitComment(self.decode()?),
            EventType::Create => EventPayload::Create(self.decode()?),
            EventType::Delete => EventPayload::Delete(self.decode()?),
            EventType::Fork => EventPayload::Fork(self.decode()?),
            EventType::Gollum => EventPayload::Gollum(self.decode()?),
            EventType::IssueComment => EventPayload::IssueComment(self.decode()?),
            EventType::Issues => EventPayload::Issues(self.decode()?),
            EventType::Member => EventPayload::Member(self.decode()?),
            EventType::Public => EventPayload::Public,
            EventType::PullRequest => EventPayload::PullRequest(self.decode()?),
            EventType::PullRequestReview => EventPayload::PullRequestReview(self.decode()?),
            EventType::PullRequestReviewComment => {
                EventPayload::PullRequestReviewComment(self.decode()?)
            }
            EventType::PullRequestReviewThread => {
                EventPayload::PullRequestReviewThread(self.decode()?)
            }
            EventType::Push => EventPayload::Push(self.decode()?),
            EventType::Release => EventPayload::Release(self.decode()?),
            EventType::Unknown(_) => return Ok(None),
        };
        Ok(Some(payload))
    }

    /// Full display block: timestamp prefix followed by the rendered payload.
    pub fn format(&self, payload: &EventPayload) -> String {
        format!(
            "{} - {}",
            self.created_at.format(TIMESTAMP_FORMAT),
            payload.render(&self.repo.name)
        )
    }

    fn decode<T: DeserializeOwned + Default>(&self) -> Result<T, FeedError> {
        if self.payload.is_null() {
            return Ok(T::default());
        }
        T::deserialize(&self.payload).map_err(|source| FeedError::PayloadDecode {
            event_id: self.id.clone(),
            event_type: self.event_type.to_string(),
            source,
        })
    }
}

/// Write one block per event to `out`, in order, flushing after each.
///
/// Stops at the first payload that fails to decode; blocks already written stay
/// written. Returns the number of blocks written.
pub fn print_events<W: Write>(events: &[Event], out: &mut W) -> Result<usize, FeedError> {
    let mut printed = 0;
    for event in events {
        match event.decode_payload()? {
            Some(payload) => {
                writeln!(out, "{}", event.format(&payload))?;
                out.flush()?;
                printed += 1;
            }
            None => {
                log::debug!(
                    "Skipping event {} with unsupported type {}",
                    event.id,
                    event.event_type
                );
            }
        }
    }
    Ok(printed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn event(event_type: &str, payload: Value) -> Event {
        serde_json::from_value(json!({
            "id": "1",
            "type": event_type,
            "actor": { "login": "octocat" },
            "repo": { "name": "r" },
            "payload": payload,
            "created_at": "2024-03-05T14:07:00Z"
        }))
        .unwrap()
    }

    fn render(event_type: &str, payload: Value) -> String {
        let event = event(event_type, payload);
        let payload = event.decode_payload().unwrap().expect("known event type");
        payload.render(&event.repo.name)
    }

    #[test]
    fn test_timestamp_prefix() {
        let event = event("WatchEvent", json!({ "action": "started" }));
        let payload = event.decode_payload().unwrap().unwrap();
        assert_eq!(
            event.format(&payload),
            "March 5, 2024 at 2:07 PM UTC - started watching for repo r"
        );
    }

    #[test]
    fn test_timestamp_morning_hour_has_no_padding() {
        let mut event = event("PublicEvent", json!({}));
        event.created_at = "2023-12-25T09:30:00Z".parse().unwrap();
        let payload = event.decode_payload().unwrap().unwrap();
        assert_eq!(
            event.format(&payload),
            "December 25, 2023 at 9:30 AM UTC - made repo r public"
        );
    }

    #[test]
    fn test_create_event_ref_types() {
        assert_eq!(
            render("CreateEvent", json!({ "ref": "main", "ref_type": "branch" })),
            "created branch main in repo r"
        );
        assert_eq!(
            render("CreateEvent", json!({ "ref": "v1.0", "ref_type": "tag" })),
            "created tag v1.0 in repo r"
        );
        assert_eq!(
            render("CreateEvent", json!({ "ref": null, "ref_type": "repository" })),
            "created repository r"
        );
        assert_eq!(
            render("CreateEvent", json!({ "ref": "x", "ref_type": "wiki" })),
            "created "
        );
    }

    #[test]
    fn test_push_event_pluralization() {
        assert_eq!(render("PushEvent", json!({ "size": 1 })), "pushed 1 commit to repo r");
        assert_eq!(render("PushEvent", json!({ "size": 2 })), "pushed 2 commits to repo r");
        assert_eq!(render("PushEvent", json!({ "size": 0 })), "pushed 0 commits to repo r");
    }

    #[test]
    fn test_simple_variants() {
        assert_eq!(
            render("CommitCommentEvent", json!({ "action": "created", "comment": { "body": "nice" } })),
            "created a comment on commit 'nice' in repo r"
        );
        assert_eq!(
            render("DeleteEvent", json!({ "ref": "old", "ref_type": "branch" })),
            "deleted branch in repo r"
        );
        assert_eq!(
            render("ForkEvent", json!({ "forkee": { "full_name": "me/r" } })),
            "forked me/r to r"
        );
        assert_eq!(
            render("MemberEvent", json!({ "action": "added", "member": { "login": "bob" } })),
            "added bob in repo r"
        );
        assert_eq!(
            render("ReleaseEvent", json!({ "action": "published", "release": { "name": "v2" } })),
            "published release v2 in repo r"
        );
        assert_eq!(
            render("ReleaseEvent", json!({ "action": "published", "release": { "name": null } })),
            "published release  in repo r"
        );
    }

    #[test]
    fn test_issue_variants() {
        assert_eq!(
            render(
                "IssuesEvent",
                json!({ "action": "opened", "issue": { "number": 7, "title": "Bug" } })
            ),
            "opened issue #7 'Bug' 'Bug' in repo r"
        );
        assert_eq!(
            render(
                "IssueCommentEvent",
                json!({
                    "action": "created",
                    "issue": { "number": 7, "title": "Bug" },
                    "comment": { "body": "same here" }
                })
            ),
            "created a comment on issue #7 'Bug' in repo r:\n'same here'"
        );
    }

    #[test]
    fn test_pull_request_variants() {
        let pr = json!({ "number": 12, "title": "Add docs" });
        assert_eq!(
            render(
                "PullRequestEvent",
                json!({ "action": "opened", "number": 99, "pull_request": pr })
            ),
            "opened pull request #12 'Add docs' in repo r"
        );
        assert_eq!(
            render("PullRequestReviewEvent", json!({ "action": "created", "pull_request": pr })),
            "created pull request #12 'Add docs' in repo r"
        );
        assert_eq!(
            render(
                "PullRequestReviewCommentEvent",
                json!({ "action": "created", "pull_request": pr, "comment": { "body": "nit" } })
            ),
            "created a comment on pull request #12 'Add docs' in repo r:\n'nit'"
        );
        assert_eq!(
            render("PullRequestReviewThreadEvent", json!({ "action": "resolved", "pull_request": pr })),
            "resolved pull request review thread #12 'Add docs' in repo r"
        );
    }

    #[test]
    fn test_gollum_event_lists_pages() {
        assert_eq!(
            render(
                "GollumEvent",
                json!({ "pages": [
                    { "page_name": "Home", "action": "created" },
                    { "page_name": "FAQ", "action": "edited" }
                ] })
            ),
            "created/updated following pages in repo r:\ncreated page Home\nedited page FAQ"
        );
    }

    #[test]
    fn test_public_event_ignores_payload() {
        assert_eq!(render("PublicEvent", json!("anything")), "made repo r public");
    }

    #[test]
    fn test_missing_payload_fields_default() {
        assert_eq!(render("WatchEvent", json!({})), " watching for repo r");
        assert_eq!(render("PushEvent", Value::Null), "pushed 0 commits to repo r");
    }

    #[test]
    fn test_null_fields_decode_as_empty() {
        assert_eq!(render("WatchEvent", json!({ "action": null })), " watching for repo r");
        assert_eq!(
            render(
                "PullRequestReviewCommentEvent",
                json!({
                    "action": "created",
                    "pull_request": { "number": null, "title": "Fix" },
                    "comment": { "body": null }
                })
            ),
            "created a comment on pull request #0 'Fix' in repo r:\n''"
        );
        assert_eq!(
            render("CommitCommentEvent", json!({ "action": "created", "comment": null })),
            "created a comment on commit '' in repo r"
        );
        assert_eq!(
            render("GollumEvent", json!({ "pages": null })),
            "created/updated following pages in repo r:"
        );
        assert_eq!(render("PushEvent", json!({ "size": null })), "pushed 0 commits to repo r");
    }

    #[test]
    fn test_null_actor_and_repo_in_envelope() {
        let event: Event = serde_json::from_value(json!({
            "id": "7",
            "type": "PublicEvent",
            "actor": null,
            "repo": { "name": null },
            "payload": {},
            "created_at": "2024-03-05T14:07:00Z"
        }))
        .unwrap();
        assert_eq!(event.actor.login, "");
        assert_eq!(event.repo.name, "");
    }

    #[test]
    fn test_unknown_event_type_is_skipped() {
        let event = event("UnknownEvent", json!({ "whatever": [1, 2, 3] }));
        assert_eq!(event.event_type, EventType::Unknown("UnknownEvent".to_string()));
        assert!(event.decode_payload().unwrap().is_none());
    }

    #[test]
    fn test_mismatched_payload_is_a_decode_error() {
        let event = event("PushEvent", json!({ "size": "three" }));
        let err = event.decode_payload().unwrap_err();
        assert!(matches!(
            err,
            FeedError::PayloadDecode { ref event_type, .. } if event_type == "PushEvent"
        ));
    }

    #[test]
    fn test_print_events_streams_in_order_and_skips_unknown() {
        let events = vec![
            event("PushEvent", json!({ "size": 3 })),
            event("UnknownEvent", json!({})),
            event("WatchEvent", json!({ "action": "started" })),
        ];
        let mut out = Vec::new();
        let printed = print_events(&events, &mut out).unwrap();
        assert_eq!(printed, 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "March 5, 2024 at 2:07 PM UTC - pushed 3 commits to repo r\n\
             March 5, 2024 at 2:07 PM UTC - started watching for repo r\n"
        );
    }

    #[test]
    fn test_print_events_keeps_output_before_failure() {
        let events = vec![
            event("PushEvent", json!({ "size": 1 })),
            event("IssuesEvent", json!({ "issue": "not an object" })),
            event("WatchEvent", json!({ "action": "started" })),
        ];
        let mut out = Vec::new();
        let err = print_events(&events, &mut out).unwrap_err();
        assert!(matches!(err, FeedError::PayloadDecode { .. }));
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "March 5, 2024 at 2:07 PM UTC - pushed 1 commit to repo r\n"
        );
    }

    #[test]
    fn test_formatting_is_deterministic() {
        let event = event("ForkEvent", json!({ "forkee": { "full_name": "a/b" } }));
        let payload = event.decode_payload().unwrap().unwrap();
        assert_eq!(event.format(&payload), event.format(&payload));
    }
}
