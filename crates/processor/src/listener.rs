//! Pull request event listener
//!
//! Decides for every opened, reopened or rescoped pull request whether the
//! CI server should be told about the source branch, and hands the request
//! to the notifier.

use host::{PullRequestEvent, PullRequestEventKind, Rescope};
use std::sync::Arc;
use tracing::{debug, info};

use crate::context::EventContext;
use crate::dispatch::NotificationRequest;
use crate::eligibility::EligibilityFilter;
use crate::rescope::classify;
use crate::services::{MergeService, Notifier, SettingsLookup};

/// Why an event was dropped before reaching the filters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// A rescope that did not move the source head
    DuplicateRescope,
    /// The destination repository has no webhook settings
    NotConfigured,
}

/// Terminal state of one event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Dispatched(NotificationRequest),
    Dropped(DropReason),
    /// An eligibility filter vetoed the notification
    Suppressed,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Dispatched(_) => "dispatched",
            Outcome::Dropped(DropReason::DuplicateRescope) => "duplicate_rescope",
            Outcome::Dropped(DropReason::NotConfigured) => "not_configured",
            Outcome::Suppressed => "suppressed",
        }
    }
}

/// Handles pull request events
pub struct PullRequestEventListener {
    filter_chain: Arc<dyn EligibilityFilter>,
    notifier: Arc<dyn Notifier>,
    settings: Arc<dyn SettingsLookup>,
    merge_service: Arc<dyn MergeService>,
}

impl PullRequestEventListener {
    pub fn new(
        filter_chain: Arc<dyn EligibilityFilter>,
        notifier: Arc<dyn Notifier>,
        settings: Arc<dyn SettingsLookup>,
        merge_service: Arc<dyn MergeService>,
    ) -> Self {
        Self {
            filter_chain,
            notifier,
            settings,
            merge_service,
        }
    }

    /// Process a pull request event
    pub async fn handle(&self, event: &PullRequestEvent) -> common::Result<Outcome> {
        info!(
            "PR #{} in {}: {} by {}",
            event.pull_request.id,
            event.destination_repository(),
            event.kind.as_str(),
            event.actor.name
        );

        match &event.kind {
            PullRequestEventKind::Opened => self.on_opened(event).await,
            PullRequestEventKind::Reopened => self.on_reopened(event).await,
            PullRequestEventKind::Rescoped(rescope) => self.on_rescoped(event, rescope).await,
        }
    }

    async fn on_opened(&self, event: &PullRequestEvent) -> common::Result<Outcome> {
        self.handle_event(event).await
    }

    async fn on_reopened(&self, event: &PullRequestEvent) -> common::Result<Outcome> {
        self.handle_event(event).await
    }

    async fn on_rescoped(
        &self,
        event: &PullRequestEvent,
        rescope: &Rescope,
    ) -> common::Result<Outcome> {
        let side = classify(rescope.previous_from_hash.as_deref(), event.source_commit());
        if !side.is_eligible() {
            debug!(
                "Destination-only rescope of PR #{} (to-ref was {:?})",
                event.pull_request.id, rescope.previous_to_hash
            );
            return Ok(Outcome::Dropped(DropReason::DuplicateRescope));
        }

        // The host only updates the destination's merge refs for fork PRs
        // when asked, so do that before the source head is read.
        self.merge_service
            .force_merge_refresh(event.destination_repository(), event.pull_request.id)
            .await?;

        self.handle_event(event).await
    }

    /// Common pipeline for every event kind
    async fn handle_event(&self, event: &PullRequestEvent) -> common::Result<Outcome> {
        if self
            .settings
            .get_settings(event.destination_repository())
            .await?
            .is_none()
        {
            debug!("No webhook settings for {}", event.destination_repository());
            return Ok(Outcome::Dropped(DropReason::NotConfigured));
        }

        let context = EventContext::from_event(event);
        if !self.filter_chain.evaluate(&context).await?.is_allowed() {
            return Ok(Outcome::Suppressed);
        }

        let request = NotificationRequest::for_event(event);
        info!(
            "Requesting notification for {}@{} in {}",
            request.branch,
            request.commit_hash.as_deref().unwrap_or("-"),
            request.repository
        );
        self.notifier.dispatch(request.clone());
        Ok(Outcome::Dispatched(request))
    }
}
