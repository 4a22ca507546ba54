//! Response-related utilities for Slack interactions.
//!
//! This module provides standardized ways to create the ephemeral payloads
//! sent back on the synchronous path and the canned error texts.

use serde_json::{Value, json};

pub const AUTH_FAILURE_TEXT: &str =
    ":no_entry_sign: Error (403_invalid_request) - An error has occurred. Please contact Admin.";

pub const INVALID_COMMAND_TEXT: &str =
    ":no_entry_sign: Error - Invalid Slack Command. Please check /help to see details.";

pub const INVALID_LINK_TEXT: &str =
    ":no_entry_sign: Error - Invalid Github PR link. Please put valid Url.";

pub const MEMBERSHIP_FAILURE_TEXT: &str =
    ":no_entry_sign: Error (err_conversations_members) - An error has occurred. Please contact Admin.";

pub const NO_ELIGIBLE_ASSIGNEE_TEXT: &str =
    ":no_entry_sign: Error (err_no_eligible_assignee) - Nobody else in this channel can take the request.";

/// Create a JSON payload for an ephemeral response
///
/// Ephemeral messages are only visible to the user who triggered the command.
///
/// # Examples
///
/// ```
/// use taskmaster::slack::response_builder::create_ephemeral_payload;
///
/// let payload = create_ephemeral_payload("This message is only visible to you");
/// ```
#[must_use]
pub fn create_ephemeral_payload(text: &str) -> Value {
    json!({
        "text": text,
        "response_type": "ephemeral"
    })
}

/// Acknowledgment text returned while the request resolves in the background.
#[must_use]
pub fn ack_text(command: &str) -> String {
    format!("Your command ({command}) has been received. Please wait for the results :hourglass:")
}
