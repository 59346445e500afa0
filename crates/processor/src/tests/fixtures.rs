//! Pull request events modelled on a fork PR into `PRJ/app`

use common::models::RepositorySettings;
use host::{HostUser, Project, PullRequest, PullRequestEvent, PullRequestRef, Repository, Rescope};

pub const DESTINATION_ID: i64 = 1;
pub const DESTINATION_SLUG: &str = "app";
pub const ACTOR: &str = "alice";

pub fn destination_repository() -> Repository {
    Repository {
        id: DESTINATION_ID,
        slug: DESTINATION_SLUG.to_string(),
        project: Project {
            id: 10,
            key: "PRJ".to_string(),
        },
    }
}

fn fork_repository() -> Repository {
    Repository {
        id: 2,
        slug: "app".to_string(),
        project: Project {
            id: 20,
            key: "~ALICE".to_string(),
        },
    }
}

fn actor() -> HostUser {
    HostUser {
        id: 7,
        name: ACTOR.to_string(),
        display_name: Some("Alice".to_string()),
    }
}

pub fn pull_request(from_ref: &str, from_commit: Option<&str>) -> PullRequest {
    PullRequest {
        id: 42,
        title: "Add feature".to_string(),
        from_ref: PullRequestRef {
            id: from_ref.to_string(),
            display_id: from_ref.trim_start_matches("refs/heads/").to_string(),
            latest_commit: from_commit.map(str::to_string),
            repository: fork_repository(),
        },
        to_ref: PullRequestRef {
            id: "refs/heads/main".to_string(),
            display_id: "main".to_string(),
            latest_commit: Some("d".repeat(40)),
            repository: destination_repository(),
        },
    }
}

pub fn opened(from_ref: &str, from_commit: Option<&str>) -> PullRequestEvent {
    PullRequestEvent::opened(pull_request(from_ref, from_commit), actor())
}

pub fn reopened(from_ref: &str, from_commit: Option<&str>) -> PullRequestEvent {
    PullRequestEvent::reopened(pull_request(from_ref, from_commit), actor())
}

pub fn rescoped(
    from_ref: &str,
    previous_from_hash: Option<&str>,
    from_commit: Option<&str>,
) -> PullRequestEvent {
    PullRequestEvent::rescoped(
        pull_request(from_ref, from_commit),
        actor(),
        Rescope {
            previous_from_hash: previous_from_hash.map(str::to_string),
            previous_to_hash: Some("d".repeat(40)),
        },
    )
}

pub fn settings() -> RepositorySettings {
    RepositorySettings::new("http://jenkins.local", "ssh://git@localhost/prj/app.git")
}
