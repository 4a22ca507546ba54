use serde::{Deserialize, Serialize};

/// The three request flavors, one per inbound endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    PerformTask,
    ReviewPullRequest,
    InspectThreadOrLink,
}

impl RequestKind {
    /// Human-facing label shown in the notification's Type field.
    #[must_use]
    pub fn display_label(self) -> &'static str {
        match self {
            RequestKind::PerformTask => "Task Request :wrench:",
            RequestKind::ReviewPullRequest => "Pull Request Review :computer:",
            RequestKind::InspectThreadOrLink => "Inspection Request :eyes:",
        }
    }
}

/// How the assignee should be chosen for a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssigneeMode {
    /// Exactly one name was given after the subject token.
    Explicit(String),
    /// Several names were given; pick one of them uniformly.
    RandomFromList(Vec<String>),
    /// No names were given; pick from the channel membership.
    RandomFromChannel,
}

/// What the request is about: an opaque task description or a validated link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandSubject {
    Task(String),
    Link(String),
}

impl CommandSubject {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            CommandSubject::Task(task) => task,
            CommandSubject::Link(link) => link,
        }
    }
}

/// A validated slash command, ready for background resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub kind: RequestKind,
    pub mode: AssigneeMode,
    pub subject: CommandSubject,
}

/// Who got the request and how they were chosen. Built once per request by
/// the resolver and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentOutcome {
    pub assignee: String,
    pub was_random: bool,
}

/// Form fields of a Slack slash-command webhook that the relay uses.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SlashCommandEvent {
    pub command: String,
    pub text: String,
    pub user_id: String,
    pub channel_id: String,
    pub response_url: String,
}

/// The subset of a `users.info` profile the resolver cares about.
#[derive(Debug, Clone, Deserialize)]
pub struct UserInfo {
    pub id: String,
    #[serde(default)]
    pub is_bot: bool,
    #[serde(default)]
    pub is_app_user: bool,
}
