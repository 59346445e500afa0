//! Pull request webhook trigger service
//!
//! Receives pull request events from the code-hosting application and asks
//! the configured CI server to build the source branch when appropriate.

use host::HostClient;
use processor::eligibility::{BranchFilter, IgnoreCommittersFilter};
use processor::{EligibilityFilterChain, InMemorySettingsStore, JenkinsNotifier, PullRequestEventListener};
use std::sync::Arc;
use tracing::info;

mod error;
mod routes;
mod state;

use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api=debug".parse()?)
                .add_directive("processor=debug".parse()?),
        )
        .init();

    info!("Starting pull request webhook trigger");

    let config = common::Config::from_env()?;

    let settings = Arc::new(match &config.settings_file {
        Some(path) => InMemorySettingsStore::load(path).await?,
        None => {
            info!("SETTINGS_FILE not set, webhooks are disabled for every repository");
            InMemorySettingsStore::new()
        }
    });

    let filter_chain = EligibilityFilterChain::default()
        .with(Arc::new(IgnoreCommittersFilter::new(settings.clone())))
        .with(Arc::new(BranchFilter::new(settings.clone())));
    let notifier = JenkinsNotifier::new(settings.clone(), config.notify_timeout)?;
    let host_client = HostClient::new(config.host_base_url.clone(), config.host_token.clone());

    let listener = PullRequestEventListener::new(
        Arc::new(filter_chain),
        Arc::new(notifier),
        settings,
        Arc::new(host_client),
    );

    let addr = config.bind_addr();
    let state = Arc::new(AppState::new(config, listener));
    let app = routes::router(state);

    info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
