//! REST client for the code-hosting application

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::events::Repository;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Host API error: {status} - {message}")]
    Api { status: u16, message: String },
}

/// Host REST API client
#[derive(Clone)]
pub struct HostClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

/// Merge check as returned by the host
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeStatus {
    pub can_merge: bool,
    #[serde(default)]
    pub conflicted: bool,
    #[serde(default)]
    pub outcome: Option<String>,
}

impl HostClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        let client = reqwest::Client::new();
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        }
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("pr-webhook-trigger/0.1"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(ref token) = self.token {
            if let Ok(val) = HeaderValue::from_str(&format!("Bearer {}", token)) {
                headers.insert(AUTHORIZATION, val);
            }
        }
        headers
    }

    async fn get<T: for<'de> Deserialize<'de>>(&self, url: &str) -> Result<T, ClientError> {
        debug!("GET {}", url);
        let resp = self.client.get(url).headers(self.headers()).send().await?;

        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound(url.to_string()));
        }
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(resp.json().await?)
    }

    /// Run the host's merge check for a pull request.
    ///
    /// The host updates the destination repository's merge refs as a side
    /// effect, which is what callers rely on; the returned status is advisory.
    pub async fn merge_status(
        &self,
        repository: &Repository,
        pull_request_id: i64,
    ) -> Result<MergeStatus, ClientError> {
        let url = format!(
            "{}/rest/api/1.0/projects/{}/repos/{}/pull-requests/{}/merge",
            self.base_url, repository.project.key, repository.slug, pull_request_id
        );
        self.get(&url).await
    }
}
