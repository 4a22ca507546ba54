use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Invalid slash command")]
    InvalidCommand,

    #[error("No link found in command text")]
    MissingUrl,

    #[error("Link failed validation: {0}")]
    InvalidLink(String),

    #[error("Failed to fetch channel membership: {0}")]
    MembershipLookup(String),

    #[error("No eligible assignee in channel")]
    NoEligibleAssignee,

    #[error("Failed to parse Slack payload: {0}")]
    ParseError(String),

    #[error("Failed to access Slack API: {0}")]
    ApiError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),
}

impl From<reqwest::Error> for RelayError {
    fn from(error: reqwest::Error) -> Self {
        RelayError::HttpError(error.to_string())
    }
}
