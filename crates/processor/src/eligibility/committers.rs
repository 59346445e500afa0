use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use super::{Eligibility, EligibilityFilter};
use crate::context::EventContext;
use crate::services::SettingsLookup;

/// Denies events caused by users listed in the repository's ignored committers
pub struct IgnoreCommittersFilter {
    settings: Arc<dyn SettingsLookup>,
}

impl IgnoreCommittersFilter {
    pub fn new(settings: Arc<dyn SettingsLookup>) -> Self {
        Self { settings }
    }
}

#[async_trait]
impl EligibilityFilter for IgnoreCommittersFilter {
    fn name(&self) -> &str {
        "ignore-committers"
    }

    async fn evaluate(&self, context: &EventContext<'_>) -> common::Result<Eligibility> {
        let Some(settings) = self.settings.get_settings(context.repository()).await? else {
            return Ok(Eligibility::Allow);
        };
        if settings.is_ignored_committer(context.username()) {
            debug!("Ignoring activity by {}", context.username());
            return Ok(Eligibility::Deny);
        }
        Ok(Eligibility::Allow)
    }
}
