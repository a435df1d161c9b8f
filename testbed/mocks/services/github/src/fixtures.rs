use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashMap;

/// Canned response returned verbatim for a username, bypassing pagination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptedResponse {
    pub status: u16,
    pub body: String,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventFixture {
    #[serde(default)]
    users: HashMap<String, Vec<Value>>,
    #[serde(default)]
    scripted: HashMap<String, ScriptedResponse>,
}

impl EventFixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_user(&mut self, login: impl Into<String>, events: Vec<Value>) {
        self.users.insert(login.into(), events);
    }

    pub fn add_scripted(&mut self, login: impl Into<String>, response: ScriptedResponse) {
        self.scripted.insert(login.into(), response);
    }

    pub fn get_events(&self, login: &str) -> Option<&[Value]> {
        self.users.get(login).map(Vec::as_slice)
    }

    pub fn get_scripted(&self, login: &str) -> Option<&ScriptedResponse> {
        self.scripted.get(login)
    }

    pub fn from_yaml(yaml_content: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(yaml_content)?)
    }

    /// Fixture used by the integration tests:
    /// - `testuser`: 25 events cycling through every supported type plus one unknown type
    /// - `quietuser`: 3 events, fits on one page
    /// - `brokenpayload`: a push event whose payload has the wrong shape
    /// - `badjson`, `badlink`, `servererror`: scripted failures
    pub fn create_test_fixture() -> Self {
        let mut fixture = Self::new();

        let busy: Vec<Value> = (0..25)
            .map(|i| sample_event(i, SAMPLE_TYPES[i % SAMPLE_TYPES.len()], "testuser"))
            .collect();
        fixture.add_user("testuser", busy);

        let quiet: Vec<Value> = (0..3).map(|i| sample_event(i, "PushEvent", "quietuser")).collect();
        fixture.add_user("quietuser", quiet);

        let mut broken = vec![sample_event(0, "WatchEvent", "brokenpayload")];
        broken.push(json!({
            "id": "9001",
            "type": "PushEvent",
            "actor": { "login": "brokenpayload" },
            "repo": { "name": "brokenpayload/repo" },
            "payload": { "size": "many" },
            "created_at": "2024-06-01T12:00:00Z"
        }));
        broken.push(sample_event(2, "ForkEvent", "brokenpayload"));
        fixture.add_user("brokenpayload", broken);

        fixture.add_scripted(
            "badjson",
            ScriptedResponse {
                status: 200,
                body: r#"{"message": "not an array"}"#.to_string(),
                link: None,
            },
        );
        fixture.add_scripted(
            "badlink",
            ScriptedResponse {
                status: 200,
                body: "[]".to_string(),
                link: Some(r#"<http://localhost/users/badlink/events?page=x>; rel="next""#.to_string()),
            },
        );
        fixture.add_scripted(
            "servererror",
            ScriptedResponse {
                status: 500,
                body: r#"{"message": "boom"}"#.to_string(),
                link: None,
            },
        );

        fixture
    }
}

pub const SAMPLE_TYPES: &[&str] = &[
    "WatchEvent",
    "CommitCommentEvent",
    "CreateEvent",
    "DeleteEvent",
    "ForkEvent",
    "GollumEvent",
    "IssueCommentEvent",
    "IssuesEvent",
    "MemberEvent",
    "PublicEvent",
    "PullRequestEvent",
    "PullRequestReviewEvent",
    "PullRequestReviewCommentEvent",
    "PullRequestReviewThreadEvent",
    "PushEvent",
    "ReleaseEvent",
    "SponsorshipEvent",
];

/// Build an event of `event_type` with a payload in the shape the API sends.
pub fn sample_event(index: usize, event_type: &str, login: &str) -> Value {
    let repo = format!("{}/project-{}", login, index % 3);
    let pull_request = json!({ "number": 40 + index, "title": format!("Change {}", index) });
    let payload = match event_type {
        "WatchEvent" => json!({ "action": "started" }),
        "CommitCommentEvent" => json!({ "action": "created", "comment": { "body": "Looks good" } }),
        "CreateEvent" => json!({ "ref": format!("feature-{}", index), "ref_type": "branch" }),
        "DeleteEvent" => json!({ "ref": "old-branch", "ref_type": "branch" }),
        "ForkEvent" => json!({ "forkee": { "full_name": format!("{}/fork-{}", login, index) } }),
        "GollumEvent" => json!({ "pages": [{ "page_name": "Home", "action": "edited" }] }),
        "IssueCommentEvent" => json!({
            "action": "created",
            "issue": { "number": index, "title": "Crash on start" },
            "comment": { "body": "Same here" }
        }),
        "IssuesEvent" => json!({ "action": "opened", "issue": { "number": index, "title": "Crash on start" } }),
        "MemberEvent" => json!({ "action": "added", "member": { "login": "collaborator" } }),
        "PublicEvent" => json!({}),
        "PullRequestEvent" => json!({ "action": "opened", "number": 40 + index, "pull_request": pull_request }),
        "PullRequestReviewEvent" | "PullRequestReviewThreadEvent" => {
            json!({ "action": "created", "pull_request": pull_request })
        }
        "PullRequestReviewCommentEvent" => json!({
            "action": "created",
            "pull_request": pull_request,
            "comment": { "body": "nit" }
        }),
        "PushEvent" => json!({ "size": index % 3, "ref": "refs/heads/main" }),
        "ReleaseEvent" => json!({ "action": "published", "release": { "name": format!("v0.{}.0", index) } }),
        _ => json!({ "action": "created" }),
    };

    json!({
        "id": format!("{}", 1000 + index),
        "type": event_type,
        "actor": { "login": login },
        "repo": { "name": repo },
        "payload": payload,
        "created_at": format!("2024-06-01T{:02}:{:02}:00Z", index % 24, index % 60)
    })
}
