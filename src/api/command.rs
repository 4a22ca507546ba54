//! Slash-command text parsing.
//!
//! Splits the free-form `text` field into a subject token and assignee
//! candidates, and validates the subject link for the link-based commands.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::core::models::{AssigneeMode, CommandSubject, ParsedCommand, RequestKind};
use crate::errors::RelayError;

static GITHUB_PR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https://github\.com/[A-Za-z0-9_-]+/[A-Za-z0-9_-]+/pull/[0-9]+$")
        .expect("static regex compile")
});

/// Parse the raw command text for the given request kind.
///
/// Token rules:
/// - 0 tokens is rejected outright.
/// - 1 token: the assignee is drawn from the channel membership.
/// - exactly 2 tokens: the second token is the explicit assignee.
/// - more than 2 tokens: the assignee is drawn from tokens 2..
///
/// The first token is the task description for [`RequestKind::PerformTask`]
/// and an angle-bracket link for the other two kinds.
///
/// # Errors
///
/// Returns `InvalidCommand` for empty text, `MissingUrl` when a link-based
/// command has no `<...>` span, and `InvalidLink` when the extracted URL
/// fails validation for the request kind.
pub fn parse_command(raw_text: &str, kind: RequestKind) -> Result<ParsedCommand, RelayError> {
    let tokens: Vec<&str> = raw_text.split_whitespace().collect();
    if tokens.is_empty() {
        return Err(RelayError::InvalidCommand);
    }

    let mode = match tokens.len() {
        1 => AssigneeMode::RandomFromChannel,
        2 => AssigneeMode::Explicit(tokens[1].to_string()),
        _ => AssigneeMode::RandomFromList(tokens[1..].iter().map(|t| (*t).to_string()).collect()),
    };

    let subject = match kind {
        RequestKind::PerformTask => CommandSubject::Task(tokens[0].to_string()),
        RequestKind::ReviewPullRequest | RequestKind::InspectThreadOrLink => {
            let url = extract_url(tokens[0]).ok_or(RelayError::MissingUrl)?;
            let valid = match kind {
                RequestKind::ReviewPullRequest => is_valid_pr_link(&url),
                _ => is_valid_generic_link(&url),
            };
            if !valid {
                return Err(RelayError::InvalidLink(url));
            }
            CommandSubject::Link(url)
        }
    };

    Ok(ParsedCommand {
        kind,
        mode,
        subject,
    })
}

/// Extract the URL from Slack's `<url>` / `<url|label>` link markup.
fn extract_url(token: &str) -> Option<String> {
    let start = token.find('<')?;
    let rest = &token[start + 1..];
    let end = rest.find('>')?;
    let inner = &rest[..end];
    let url = inner.split('|').next().unwrap_or(inner);
    if url.is_empty() {
        return None;
    }
    Some(url.to_string())
}

fn is_valid_pr_link(url: &str) -> bool {
    GITHUB_PR_RE.is_match(url)
}

fn is_valid_generic_link(url: &str) -> bool {
    if url.chars().any(char::is_whitespace) {
        return false;
    }
    match Url::parse(url) {
        Ok(parsed) => {
            matches!(parsed.scheme(), "http" | "https")
                && parsed.host_str().is_some_and(|h| !h.is_empty())
        }
        Err(_) => false,
    }
}
