//! Health check route

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    /// Host API the merge refresh calls go to
    host_base_url: String,
    settings_file: Option<String>,
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        host_base_url: state.config.host_base_url.clone(),
        settings_file: state
            .config
            .settings_file
            .as_ref()
            .map(|p| p.display().to_string()),
    })
}
