//! Event payload parsing

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::events::*;

/// Parsed host event payload
#[derive(Debug)]
pub enum HostEventPayload {
    PullRequest(PullRequestEvent),
    Ping,
    Unknown { event_key: String },
}

/// Body shared by every pull request event key
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PullRequestPayload {
    pull_request: PullRequest,
    actor: HostUser,
    date: Option<DateTime<Utc>>,
    #[serde(flatten)]
    rescope: Rescope,
}

impl PullRequestPayload {
    fn into_event(self, kind: PullRequestEventKind) -> PullRequestEvent {
        PullRequestEvent {
            kind,
            pull_request: self.pull_request,
            actor: self.actor,
            date: self.date.unwrap_or_else(Utc::now),
        }
    }
}

impl HostEventPayload {
    /// Parse an event payload from its event key and body
    pub fn parse(event_key: &str, body: &[u8]) -> Result<Self, serde_json::Error> {
        debug!("Parsing host event: {}", event_key);

        let kind = match event_key {
            "diagnostics:ping" => return Ok(HostEventPayload::Ping),
            "pr:opened" => PullRequestEventKind::Opened,
            "pr:reopened" => PullRequestEventKind::Reopened,
            "pr:rescoped" | "pr:from_ref_updated" => {
                let payload: PullRequestPayload = serde_json::from_slice(body)?;
                let rescope = payload.rescope.clone();
                return Ok(HostEventPayload::PullRequest(
                    payload.into_event(PullRequestEventKind::Rescoped(rescope)),
                ));
            }
            _ => {
                warn!("Unknown host event key: {}", event_key);
                return Ok(HostEventPayload::Unknown {
                    event_key: event_key.to_string(),
                });
            }
        };

        let payload: PullRequestPayload = serde_json::from_slice(body)?;
        Ok(HostEventPayload::PullRequest(payload.into_event(kind)))
    }
}
