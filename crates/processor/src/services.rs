//! Collaborators the listener depends on

use async_trait::async_trait;
use common::models::RepositorySettings;
use host::{HostClient, Repository};
use tracing::debug;

use crate::dispatch::NotificationRequest;

/// Per-repository webhook settings source
#[async_trait]
pub trait SettingsLookup: Send + Sync {
    /// `None` means webhooks are disabled for the repository.
    async fn get_settings(&self, repository: &Repository) -> common::Result<Option<RepositorySettings>>;
}

/// Host operation that refreshes a pull request's merge refs
#[async_trait]
pub trait MergeService: Send + Sync {
    async fn force_merge_refresh(
        &self,
        repository: &Repository,
        pull_request_id: i64,
    ) -> common::Result<()>;
}

/// Outbound notification sink.
///
/// `dispatch` must hand the request off and return without waiting for delivery.
pub trait Notifier: Send + Sync {
    fn dispatch(&self, request: NotificationRequest);
}

#[async_trait]
impl MergeService for HostClient {
    async fn force_merge_refresh(
        &self,
        repository: &Repository,
        pull_request_id: i64,
    ) -> common::Result<()> {
        let status = self
            .merge_status(repository, pull_request_id)
            .await
            .map_err(|e| common::Error::Host(e.to_string()))?;
        debug!(
            "Merge refs refreshed for PR #{} in {} (can merge: {})",
            pull_request_id, repository, status.can_merge
        );
        Ok(())
    }
}
