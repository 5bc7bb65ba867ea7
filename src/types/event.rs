//! Typed representation of the GitHub public events feed.
//!
//! These types deserialize the payloads returned by
//! `GET /users/{username}/events/public`. Only the fields the renderer needs
//! are modeled; everything else in the wire format is ignored.
//!
//! The feed is ordered most-recent-first and events are immutable once
//! fetched. Each run fetches a fresh page and discards it afterwards.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::ids::RepoId;

/// A single public activity event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawEvent {
    /// The event kind, from the wire-format `type` tag.
    #[serde(rename = "type")]
    pub kind: EventKind,

    /// The repository the event happened in.
    pub repo: EventRepo,

    /// Kind-specific payload. Absent fields deserialize to `None`.
    #[serde(default)]
    pub payload: EventPayload,

    /// When the event was created. Used for diagnostics only.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// The kind of a public event.
///
/// This is a closed set: every supported kind has a renderer, and anything
/// else parses to [`EventKind::Unsupported`] and is dropped by the pipeline.
/// Adding a kind here without a renderer arm is a compile error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A comment on an issue or PR conversation.
    IssueComment,

    /// An issue was opened, closed, reopened, etc.
    Issues,

    /// A pull request was opened, closed, merged, etc.
    PullRequest,

    /// Commits were pushed to a branch.
    Push,

    /// The repository was forked.
    Fork,

    /// The repository was starred.
    Watch,

    /// A private repository was made public.
    Public,

    /// A repository, branch, or tag was created.
    Create,

    /// Any event kind the bot does not render (e.g. `GollumEvent`).
    Unsupported,
}

impl EventKind {
    /// Parses the wire-format `type` tag. Unknown tags are not an error;
    /// they parse to [`EventKind::Unsupported`].
    pub fn from_api_str(tag: &str) -> Self {
        match tag {
            "IssueCommentEvent" => EventKind::IssueComment,
            "IssuesEvent" => EventKind::Issues,
            "PullRequestEvent" => EventKind::PullRequest,
            "PushEvent" => EventKind::Push,
            "ForkEvent" => EventKind::Fork,
            "WatchEvent" => EventKind::Watch,
            "PublicEvent" => EventKind::Public,
            "CreateEvent" => EventKind::Create,
            _ => EventKind::Unsupported,
        }
    }

    /// Returns the wire-format `type` tag, or `None` for unsupported kinds.
    ///
    /// The allow-list in the configuration is matched against this string,
    /// case-insensitively.
    pub fn as_api_str(&self) -> Option<&'static str> {
        match self {
            EventKind::IssueComment => Some("IssueCommentEvent"),
            EventKind::Issues => Some("IssuesEvent"),
            EventKind::PullRequest => Some("PullRequestEvent"),
            EventKind::Push => Some("PushEvent"),
            EventKind::Fork => Some("ForkEvent"),
            EventKind::Watch => Some("WatchEvent"),
            EventKind::Public => Some("PublicEvent"),
            EventKind::Create => Some("CreateEvent"),
            EventKind::Unsupported => None,
        }
    }

    /// Returns true if the renderer has an entry for this kind.
    pub fn is_renderable(&self) -> bool {
        !matches!(self, EventKind::Unsupported)
    }
}

impl<'de> Deserialize<'de> for EventKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(EventKind::from_api_str(&tag))
    }
}

/// The repository an event happened in, as the events feed reports it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EventRepo {
    /// Numeric repository id, stable across renames.
    pub id: RepoId,

    /// The `owner/name` form.
    pub name: String,

    /// The API URL (`https://api.github.com/repos/owner/name`).
    pub url: String,
}

/// Kind-specific event payload.
///
/// The feed uses one loosely-shaped `payload` object for all kinds; each
/// renderer reads only the fields its kind guarantees. A field missing where
/// the kind should guarantee it makes the renderer drop the event rather
/// than panic.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EventPayload {
    /// The action verb ("opened", "closed", ...) for issue and PR events.
    pub action: Option<String>,

    /// Present on issue and issue-comment events.
    pub issue: Option<IssueRef>,

    /// Present on pull-request events.
    pub pull_request: Option<PullRequestRef>,

    /// Present on fork events: the newly created fork.
    pub forkee: Option<ForkTarget>,

    /// Present on push events.
    pub commits: Option<Vec<CommitRef>>,
}

/// The issue an event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct IssueRef {
    pub number: u64,
}

/// The pull request an event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PullRequestRef {
    pub number: u64,

    /// True when the PR was merged (as opposed to closed unmerged).
    #[serde(default)]
    pub merged: bool,
}

/// The fork created by a fork event.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ForkTarget {
    pub html_url: String,
}

/// One commit in a push event's commit list.
///
/// Only the list length matters for rendering; the fields are kept so merged
/// push events carry their full concatenated history.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommitRef {
    #[serde(default)]
    pub sha: String,

    #[serde(default)]
    pub message: String,
}
