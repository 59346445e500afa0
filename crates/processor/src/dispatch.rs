//! Notification request construction

use host::{PullRequestEvent, Repository};

const BRANCH_PREFIX: &str = "refs/heads/";

/// Data handed to the notifier for one delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    pub repository: Repository,
    pub branch: String,
    pub commit_hash: Option<String>,
}

impl NotificationRequest {
    /// Build the request from the pull request's source ref as it is now.
    pub fn for_event(event: &PullRequestEvent) -> Self {
        let from_ref = &event.pull_request.from_ref;
        Self {
            repository: event.destination_repository().clone(),
            branch: branch_name(&from_ref.id).to_string(),
            commit_hash: from_ref.latest_commit.clone(),
        }
    }
}

/// Short branch name of a ref: one leading `refs/heads/` removed.
pub fn branch_name(ref_id: &str) -> &str {
    ref_id.strip_prefix(BRANCH_PREFIX).unwrap_or(ref_id)
}
