use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use super::{Eligibility, EligibilityFilter};
use crate::context::EventContext;
use crate::dispatch::branch_name;
use crate::services::SettingsLookup;

/// Applies the repository's branch whitelist or blacklist to the source branch
pub struct BranchFilter {
    settings: Arc<dyn SettingsLookup>,
}

impl BranchFilter {
    pub fn new(settings: Arc<dyn SettingsLookup>) -> Self {
        Self { settings }
    }
}

#[async_trait]
impl EligibilityFilter for BranchFilter {
    fn name(&self) -> &str {
        "branches"
    }

    async fn evaluate(&self, context: &EventContext<'_>) -> common::Result<Eligibility> {
        let Some(settings) = self.settings.get_settings(context.repository()).await? else {
            return Ok(Eligibility::Allow);
        };
        let branch = branch_name(&context.event().pull_request.from_ref.id);
        let permitted = settings.branch_options.permits(branch);
        if !permitted {
            debug!("Branch {} excluded by {:?}", branch, settings.branch_options);
        }
        Ok(permitted.into())
    }
}
