//! Slack Web API client module
//!
//! Encapsulates the Web API lookups the relay needs, with retry logic and
//! error handling. Calls go over raw HTTP to keep the response mapping thin
//! and the base URL injectable.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;
use tokio_retry::strategy::jitter;
use tokio_retry::{Retry, strategy::ExponentialBackoff};

use crate::core::models::UserInfo;
use crate::errors::RelayError;
use crate::worker::assign::Directory;

/// Page size for `conversations.members`; Slack caps requests at 1000.
const MEMBERS_PAGE_LIMIT: u32 = 200;

/// Slack Web API client with retry logic and error handling
pub struct SlackClient {
    http: Client,
    token: String,
    api_base: String,
}

impl SlackClient {
    #[must_use]
    pub fn new(token: String, api_base: String) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            http,
            token,
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    async fn with_retry<F, Fut, T>(&self, operation: F) -> Result<T, RelayError>
    where
        F: FnMut() -> Fut + Send,
        Fut: std::future::Future<Output = Result<T, RelayError>> + Send,
        T: Send,
    {
        let strategy = ExponentialBackoff::from_millis(10).map(jitter).take(3);

        Retry::spawn(strategy, operation).await
    }

    /// POST a Web API method and return the decoded envelope.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-2xx status, an
    /// undecodable body, or an envelope with `ok: false`.
    async fn call_method(&self, method: &str, payload: &Value) -> Result<Value, RelayError> {
        let resp = self
            .http
            .post(format!("{}/{}", self.api_base, method))
            .bearer_auth(&self.token)
            .json(payload)
            .send()
            .await
            .map_err(|e| RelayError::HttpError(format!("{method}: {e}")))?;

        if !resp.status().is_success() {
            return Err(RelayError::ApiError(format!(
                "{method} HTTP {}",
                resp.status()
            )));
        }

        let body: Value = resp
            .json()
            .await
            .map_err(|e| RelayError::ParseError(format!("{method} parse: {e}")))?;

        if !body.get("ok").and_then(Value::as_bool).unwrap_or(false) {
            return Err(RelayError::ApiError(format!(
                "{method} error: {}",
                body.get("error")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown")
            )));
        }

        Ok(body)
    }

    /// Fetch the full membership of a channel, following pagination cursors.
    ///
    /// # Errors
    ///
    /// Returns an error if any `conversations.members` page fails.
    pub async fn conversations_members(&self, channel_id: &str) -> Result<Vec<String>, RelayError> {
        self.with_retry(|| async {
            let mut members: Vec<String> = Vec::new();
            let mut cursor: Option<String> = None;

            loop {
                let mut payload = json!({
                    "channel": channel_id,
                    "limit": MEMBERS_PAGE_LIMIT,
                });
                if let Some(c) = &cursor {
                    payload["cursor"] = Value::String(c.clone());
                }

                let body = self.call_method("conversations.members", &payload).await?;

                if let Some(page) = body.get("members").and_then(Value::as_array) {
                    members.extend(page.iter().filter_map(Value::as_str).map(str::to_string));
                }

                cursor = body
                    .pointer("/response_metadata/next_cursor")
                    .and_then(Value::as_str)
                    .filter(|c| !c.is_empty())
                    .map(str::to_string);
                if cursor.is_none() {
                    break;
                }
            }

            Ok(members)
        })
        .await
    }

    /// Look up a user's profile flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the `users.info` call fails or the profile cannot
    /// be decoded.
    pub async fn users_info(&self, user_id: &str) -> Result<UserInfo, RelayError> {
        self.with_retry(|| async {
            let body = self
                .call_method("users.info", &json!({ "user": user_id }))
                .await?;

            let user = body
                .get("user")
                .ok_or_else(|| RelayError::ParseError("users.info: missing user".to_string()))?;

            serde_json::from_value(user.clone())
                .map_err(|e| RelayError::ParseError(format!("users.info parse: {e}")))
        })
        .await
    }
}

#[async_trait]
impl Directory for SlackClient {
    async fn channel_members(&self, channel_id: &str) -> Result<Vec<String>, RelayError> {
        self.conversations_members(channel_id).await
    }

    async fn user_info(&self, user_id: &str) -> Result<UserInfo, RelayError> {
        self.users_info(user_id).await
    }
}
