/// TASKMASTER - A Slack command relay that assigns tasks, reviews and inspections.
///
/// This crate implements a slash-command webhook service:
/// 1. An HTTP layer that receives and verifies Slack slash commands, then
///    immediately acknowledges them with an ephemeral response
/// 2. A background continuation that resolves an assignee (explicit or
///    randomly drawn from the channel membership) and posts the formatted
///    notification to the command's `response_url`
///
/// # Architecture
///
/// The system uses:
/// - axum for the inbound webhook endpoints
/// - reqwest for Slack Web API lookups and the deferred `response_url` post
/// - hmac/sha2 for request signature verification
/// - Tokio for async runtime and the ack/background hand-off
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use taskmaster::api::handler::{AppState, build_router};
/// use taskmaster::core::config::AppConfig;
/// use taskmaster::slack::SlackClient;
/// use taskmaster::worker::SpawnMode;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Set up structured logging
///     taskmaster::setup_logging();
///
///     // Create a dummy AppConfig for the example
///     let config = AppConfig {
///         slack_bot_token: "dummy_token".to_string(),
///         slack_signing_secret: "dummy_secret".to_string(),
///         slack_api_base: "https://slack.com/api".to_string(),
///         bind_addr: "127.0.0.1:5000".to_string(),
///     };
///
///     let slack = Arc::new(SlackClient::new(
///         config.slack_bot_token.clone(),
///         config.slack_api_base.clone(),
///     ));
///     let state = AppState {
///         config: config.clone(),
///         slack,
///         http: reqwest::Client::new(),
///         spawn_mode: SpawnMode::Background,
///     };
///
///     let app = build_router(state);
///     let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
///     axum::serve(listener, app).await?;
///     Ok(())
/// }
/// ```
// Module declarations
pub mod api;
pub mod core;
pub mod errors;
pub mod slack;
pub mod worker;

/// Configure structured logging with JSON format.
///
/// This function sets up tracing-subscriber with a JSON formatter and an
/// environment-driven filter (`RUST_LOG`, defaulting to `info`). It should be
/// called once at process startup.
///
/// # Example
///
/// ```
/// // Initialize structured logging at the start of your main function
/// taskmaster::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);
    let filter_layer =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
