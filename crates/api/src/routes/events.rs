//! Host event ingress

use axum::{body::Bytes, extract::State, http::HeaderMap, Json};
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use host::HostEventPayload;

const EVENT_KEY_HEADER: &str = "X-Event-Key";

#[derive(Debug, Serialize)]
pub struct EventResponse {
    ok: bool,
    outcome: Option<&'static str>,
    message: Option<String>,
}

pub async fn pull_request(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Json<EventResponse>> {
    let event_key = headers
        .get(EVENT_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| {
            warn!("Missing {} header", EVENT_KEY_HEADER);
            ApiError::BadRequest(format!("missing {} header", EVENT_KEY_HEADER))
        })?;

    let payload = HostEventPayload::parse(event_key, &body).map_err(|e| {
        error!("Failed to parse host event: {}", e);
        ApiError::BadRequest(e.to_string())
    })?;

    let event = match payload {
        HostEventPayload::PullRequest(event) => event,
        HostEventPayload::Ping => {
            return Ok(Json(EventResponse {
                ok: true,
                outcome: None,
                message: Some("pong".to_string()),
            }))
        }
        HostEventPayload::Unknown { event_key } => {
            return Ok(Json(EventResponse {
                ok: true,
                outcome: None,
                message: Some(format!("ignored {}", event_key)),
            }))
        }
    };

    let outcome = state.listener.handle(&event).await?;
    info!(
        "Processed {} for PR #{}: {}",
        event_key,
        event.pull_request.id,
        outcome.as_str()
    );

    Ok(Json(EventResponse {
        ok: true,
        outcome: Some(outcome.as_str()),
        message: None,
    }))
}
