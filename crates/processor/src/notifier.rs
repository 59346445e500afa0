//! Jenkins `notifyCommit` notifier

use std::sync::Arc;
use std::time::Duration;

use common::models::RepositorySettings;
use tracing::{debug, error, info};

use crate::dispatch::NotificationRequest;
use crate::services::{Notifier, SettingsLookup};

/// Result of one delivery attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationResult {
    pub successful: bool,
    pub status: Option<u16>,
    pub message: String,
}

/// Calls the Git plugin's `notifyCommit` endpoint of a Jenkins server
#[derive(Clone)]
pub struct JenkinsNotifier {
    client: reqwest::Client,
    settings: Arc<dyn SettingsLookup>,
}

impl JenkinsNotifier {
    pub fn new(settings: Arc<dyn SettingsLookup>, timeout: Duration) -> common::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| common::Error::Notifier(e.to_string()))?;
        Ok(Self { client, settings })
    }

    /// Deliver a notification and wait for the response.
    ///
    /// Returns `Ok(None)` when the repository has no settings any more.
    pub async fn notify(
        &self,
        request: &NotificationRequest,
    ) -> common::Result<Option<NotificationResult>> {
        let Some(settings) = self.settings.get_settings(&request.repository).await? else {
            debug!("Settings for {} removed before delivery", request.repository);
            return Ok(None);
        };

        let url = notify_url(&settings.jenkins_base);
        let query = notify_query(&settings, request);
        debug!("GET {} {:?}", url, query);

        let result = match self.client.get(&url).query(&query).send().await {
            Ok(resp) => {
                let status = resp.status();
                let message = resp.text().await.unwrap_or_default();
                NotificationResult {
                    successful: status.is_success(),
                    status: Some(status.as_u16()),
                    message,
                }
            }
            Err(e) => NotificationResult {
                successful: false,
                status: None,
                message: e.to_string(),
            },
        };
        Ok(Some(result))
    }
}

impl Notifier for JenkinsNotifier {
    fn dispatch(&self, request: NotificationRequest) {
        let notifier = self.clone();
        tokio::spawn(async move {
            match notifier.notify(&request).await {
                Ok(Some(result)) if result.successful => {
                    info!(
                        "Notified CI of {}@{} in {}",
                        request.branch,
                        request.commit_hash.as_deref().unwrap_or("-"),
                        request.repository
                    );
                }
                Ok(Some(result)) => {
                    error!(
                        "CI notification for {} failed ({:?}): {}",
                        request.repository, result.status, result.message
                    );
                }
                Ok(None) => {}
                Err(e) => error!("CI notification for {} failed: {}", request.repository, e),
            }
        });
    }
}

fn notify_url(jenkins_base: &str) -> String {
    format!("{}/git/notifyCommit", jenkins_base.trim_end_matches('/'))
}

fn notify_query<'a>(
    settings: &'a RepositorySettings,
    request: &'a NotificationRequest,
) -> Vec<(&'static str, &'a str)> {
    let mut query = vec![("url", settings.clone_url.as_str())];
    if !settings.omit_branch_name {
        query.push(("branches", request.branch.as_str()));
    }
    if !settings.omit_hash_code {
        if let Some(hash) = request.commit_hash.as_deref() {
            query.push(("sha1", hash));
        }
    }
    query
}
