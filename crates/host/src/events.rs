//! Host pull request event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Host user (as appears in event payloads)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HostUser {
    pub id: i64,
    pub name: String,
    pub display_name: Option<String>,
}

/// Project owning a repository
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub id: i64,
    pub key: String,
}

/// Host repository (as appears in event payloads)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Repository {
    pub id: i64,
    pub slug: String,
    pub project: Project,
}

impl std::fmt::Display for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.project.key, self.slug)
    }
}

/// One side of a pull request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PullRequestRef {
    /// Fully qualified ref, e.g. `refs/heads/feature/foo`
    pub id: String,
    pub display_id: String,
    pub latest_commit: Option<String>,
    pub repository: Repository,
}

/// Host pull request (as appears in event payloads)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PullRequest {
    pub id: i64,
    pub title: String,
    pub from_ref: PullRequestRef,
    pub to_ref: PullRequestRef,
}

/// Extra data carried by a rescope
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Rescope {
    /// Source ref head before the rescope
    pub previous_from_hash: Option<String>,
    /// Destination ref head before the rescope
    pub previous_to_hash: Option<String>,
}

/// The lifecycle change a [`PullRequestEvent`] represents
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PullRequestEventKind {
    Opened,
    Reopened,
    Rescoped(Rescope),
}

impl PullRequestEventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PullRequestEventKind::Opened => "opened",
            PullRequestEventKind::Reopened => "reopened",
            PullRequestEventKind::Rescoped(_) => "rescoped",
        }
    }
}

/// A pull request lifecycle event delivered by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestEvent {
    pub kind: PullRequestEventKind,
    pub pull_request: PullRequest,
    pub actor: HostUser,
    pub date: DateTime<Utc>,
}

impl PullRequestEvent {
    pub fn opened(pull_request: PullRequest, actor: HostUser) -> Self {
        Self::new(PullRequestEventKind::Opened, pull_request, actor)
    }

    pub fn reopened(pull_request: PullRequest, actor: HostUser) -> Self {
        Self::new(PullRequestEventKind::Reopened, pull_request, actor)
    }

    pub fn rescoped(pull_request: PullRequest, actor: HostUser, rescope: Rescope) -> Self {
        Self::new(PullRequestEventKind::Rescoped(rescope), pull_request, actor)
    }

    fn new(kind: PullRequestEventKind, pull_request: PullRequest, actor: HostUser) -> Self {
        Self {
            kind,
            pull_request,
            actor,
            date: Utc::now(),
        }
    }

    /// Repository the pull request merges into
    pub fn destination_repository(&self) -> &Repository {
        &self.pull_request.to_ref.repository
    }

    /// Current head of the source ref
    pub fn source_commit(&self) -> Option<&str> {
        self.pull_request.from_ref.latest_commit.as_deref()
    }
}
