use anyhow::Context;
use dotenv::dotenv;
use log::info;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use careline::{api, config::Config, models::AppState, services::RequestClient, utils::ActivityLog};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // initialize tracing, `log` records included
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env().context("failed to load configuration")?;
    let client = RequestClient::new(config.client.clone()).context("failed to build backend client")?;
    info!("forwarding to backend at {}", client.base_url());

    let activity_log = config.server.activity_log.clone().map(ActivityLog::new);
    if let Some(activity_log) = &activity_log {
        info!("activity log at {}", activity_log.path().display());
    }

    let shared_state = Arc::new(AppState::new(client, activity_log));
    let app = api::router(shared_state);

    let listener = TcpListener::bind(config.server.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.server.bind_addr))?;
    info!("🚀 Front-end running on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
