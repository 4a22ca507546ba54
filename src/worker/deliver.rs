//! Background continuation: resolve the assignee, build the notification and
//! post it to the command's `response_url`.
//!
//! Everything here runs after the synchronous acknowledgment has been sent,
//! so failures never reach the invoking user directly. Resolution failures
//! are reported back through the `response_url` on a best-effort basis;
//! delivery failures are only logged.

use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use reqwest::Client as HttpClient;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::Value;
use tracing::{error, info};

use crate::core::models::{ParsedCommand, SlashCommandEvent};
use crate::errors::RelayError;
use crate::slack::SlackClient;
use crate::slack::message_formatter::build_notification;
use crate::slack::response_builder::{
    MEMBERSHIP_FAILURE_TEXT, NO_ELIGIBLE_ASSIGNEE_TEXT, create_ephemeral_payload,
};
use crate::worker::assign;

/// Resolve and deliver one request. Terminal for all errors.
pub async fn run(
    slack: Arc<SlackClient>,
    http: HttpClient,
    event: SlashCommandEvent,
    command: ParsedCommand,
    correlation_id: String,
) {
    let mut rng = StdRng::from_entropy();

    let outcome = match assign::resolve(
        &command.mode,
        &event.channel_id,
        &event.user_id,
        slack.as_ref(),
        &mut rng,
    )
    .await
    {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("Resolution failed (correlation_id={}): {}", correlation_id, e);
            let text = match e {
                RelayError::NoEligibleAssignee => NO_ELIGIBLE_ASSIGNEE_TEXT,
                _ => MEMBERSHIP_FAILURE_TEXT,
            };
            // The ack already went out; this error is best-effort only.
            let _ = send_response_url(&http, &event.response_url, &create_ephemeral_payload(text))
                .await;
            return;
        }
    };

    let payload = build_notification(command.kind, &event.user_id, &outcome, &command.subject);

    if let Err(e) = send_response_url(&http, &event.response_url, &payload).await {
        error!("Delivery failed (correlation_id={}): {}", correlation_id, e);
        return;
    }

    info!(
        "Delivered notification for {} to {} (correlation_id={})",
        event.command, outcome.assignee, correlation_id
    );
}

/// POST a JSON payload to a `response_url`. Single attempt; a failed post
/// is logged and never retried.
///
/// # Errors
///
/// Returns an error on transport failure or a non-2xx response.
pub async fn send_response_url(
    http_client: &HttpClient,
    response_url: &str,
    payload: &Value,
) -> Result<(), RelayError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let resp = http_client
        .post(response_url)
        .headers(headers)
        .json(payload)
        .send()
        .await?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body_text = resp
            .text()
            .await
            .unwrap_or_else(|_| "<failed to read body>".to_string());
        error!(
            "response_url POST failed: status={} body={}",
            status, body_text
        );
        return Err(RelayError::HttpError(format!(
            "response_url POST failed with {status}"
        )));
    }

    Ok(())
}
