use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::net::TcpListener;
use tracing::info;

use taskmaster::api::handler::{AppState, build_router};
use taskmaster::core::config::AppConfig;
use taskmaster::slack::SlackClient;
use taskmaster::worker::SpawnMode;

#[tokio::main]
async fn main() -> Result<()> {
    taskmaster::setup_logging();

    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {e}"))?;

    let slack = Arc::new(SlackClient::new(
        config.slack_bot_token.clone(),
        config.slack_api_base.clone(),
    ));
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()?;

    let state = AppState {
        config: config.clone(),
        slack,
        http,
        spawn_mode: SpawnMode::Background,
    };
    let app = build_router(state);

    let listener = TcpListener::bind(&config.bind_addr).await?;
    info!("Command relay listening on {}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
