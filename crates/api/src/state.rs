//! Application state

use common::Config;
use processor::PullRequestEventListener;

/// Shared application state
pub struct AppState {
    pub config: Config,
    pub listener: PullRequestEventListener,
}

impl AppState {
    pub fn new(config: Config, listener: PullRequestEventListener) -> Self {
        Self { config, listener }
    }
}
