//! Webhook endpoints - thin dispatcher over the relay pipeline.
//!
//! Each slash command gets its own route; all three share one handler that:
//! - verifies the request signature
//! - parses the form body and command text
//! - returns the ephemeral acknowledgment synchronously
//! - hands resolution and delivery to a background continuation

use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::routing::{get, post};
use serde_json::Value;
use tracing::{error, info};
use uuid::Uuid;

use crate::api::command::parse_command;
use crate::api::parsing::parse_form_data;
use crate::api::signature::verify_slack_signature;
use crate::core::config::AppConfig;
use crate::core::models::RequestKind;
use crate::errors::RelayError;
use crate::slack::SlackClient;
use crate::slack::response_builder::{
    AUTH_FAILURE_TEXT, INVALID_COMMAND_TEXT, INVALID_LINK_TEXT, ack_text,
    create_ephemeral_payload,
};
use crate::worker::{self, deliver, SpawnMode};

const TIMESTAMP_HEADER: &str = "x-slack-request-timestamp";
const SIGNATURE_HEADER: &str = "x-slack-signature";

/// Shared state for the relay routes.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub slack: Arc<SlackClient>,
    pub http: reqwest::Client,
    pub spawn_mode: SpawnMode,
}

/// Build the relay router: one route per request kind plus a liveness probe.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/do", post(handle_do))
        .route("/git-review", post(handle_git_review))
        .route("/inspect", post(handle_inspect))
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
}

async fn handle_do(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> Json<Value> {
    handle_command(state, RequestKind::PerformTask, &headers, &body).await
}

async fn handle_git_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> Json<Value> {
    handle_command(state, RequestKind::ReviewPullRequest, &headers, &body).await
}

async fn handle_inspect(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> Json<Value> {
    handle_command(state, RequestKind::InspectThreadOrLink, &headers, &body).await
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> &'a str {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

async fn handle_command(
    state: AppState,
    kind: RequestKind,
    headers: &HeaderMap,
    body: &str,
) -> Json<Value> {
    let timestamp = header_str(headers, TIMESTAMP_HEADER);
    let signature = header_str(headers, SIGNATURE_HEADER);

    if !verify_slack_signature(
        body,
        timestamp,
        signature,
        &state.config.slack_signing_secret,
    ) {
        error!("Rejected request with invalid signature");
        return Json(create_ephemeral_payload(AUTH_FAILURE_TEXT));
    }

    let event = match parse_form_data(body) {
        Ok(event) => event,
        Err(e) => {
            error!("Failed to parse slash command body: {}", e);
            return Json(create_ephemeral_payload(INVALID_COMMAND_TEXT));
        }
    };

    let command = match parse_command(&event.text, kind) {
        Ok(command) => command,
        Err(e @ (RelayError::MissingUrl | RelayError::InvalidLink(_))) => {
            info!("Rejected {} from {}: {}", event.command, event.user_id, e);
            return Json(create_ephemeral_payload(INVALID_LINK_TEXT));
        }
        Err(e) => {
            info!("Rejected {} from {}: {}", event.command, event.user_id, e);
            return Json(create_ephemeral_payload(INVALID_COMMAND_TEXT));
        }
    };

    let correlation_id = Uuid::new_v4().to_string();
    info!(
        "Accepted {} from {} in {} (correlation_id={})",
        event.command, event.user_id, event.channel_id, correlation_id
    );

    let ack = create_ephemeral_payload(&ack_text(&event.command));

    let slack = Arc::clone(&state.slack);
    let http = state.http.clone();
    worker::dispatch(
        state.spawn_mode,
        deliver::run(slack, http, event, command, correlation_id),
    )
    .await;

    Json(ack)
}
