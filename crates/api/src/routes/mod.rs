//! API routes

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub mod events;
pub mod health;

/// Build the HTTP ingress router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/events/pull-request", post(events::pull_request))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
