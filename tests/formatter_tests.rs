use serde_json::Value;

use taskmaster::core::models::{AssignmentOutcome, CommandSubject, RequestKind};
use taskmaster::slack::message_formatter::build_notification;

/// Tests for the notification formatting logic
/// These verify the field matrix per request kind and the random-selection
/// context block.

fn explicit_outcome(assignee: &str) -> AssignmentOutcome {
    AssignmentOutcome {
        assignee: assignee.to_string(),
        was_random: false,
    }
}

fn random_outcome(assignee: &str) -> AssignmentOutcome {
    AssignmentOutcome {
        assignee: assignee.to_string(),
        was_random: true,
    }
}

fn fields_text(payload: &Value) -> String {
    payload["blocks"][1]["fields"]
        .as_array()
        .expect("fields section present")
        .iter()
        .filter_map(|f| f["text"].as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_task_request_has_task_field() {
    let payload = build_notification(
        RequestKind::PerformTask,
        "U_INIT",
        &explicit_outcome("alice"),
        &CommandSubject::Task("fix-bug".to_string()),
    );

    let fields = fields_text(&payload);
    assert!(fields.contains("*Task :rocket:*"), "Task field expected");
    assert!(
        !fields.contains("*Link / Thread :rocket:*"),
        "Task requests should not carry a link field"
    );
    assert!(fields.contains("Task Request :wrench:"));
    assert!(fields.contains("<@U_INIT>"));
}

#[test]
fn test_review_request_has_link_field() {
    let payload = build_notification(
        RequestKind::ReviewPullRequest,
        "U_INIT",
        &explicit_outcome("alice"),
        &CommandSubject::Link("https://github.com/org/repo/pull/42".to_string()),
    );

    let fields = fields_text(&payload);
    assert!(fields.contains("*Link / Thread :rocket:*"));
    assert!(!fields.contains("*Task :rocket:*"));
    assert!(fields.contains("Pull Request Review :computer:"));
}

#[test]
fn test_inspect_request_has_link_field() {
    let payload = build_notification(
        RequestKind::InspectThreadOrLink,
        "U_INIT",
        &explicit_outcome("alice"),
        &CommandSubject::Link("https://example.com/thread/1".to_string()),
    );

    let fields = fields_text(&payload);
    assert!(fields.contains("*Link / Thread :rocket:*"));
    assert!(fields.contains("Inspection Request :eyes:"));
}

#[test]
fn test_header_names_assignee() {
    let payload = build_notification(
        RequestKind::PerformTask,
        "U_INIT",
        &explicit_outcome("alice"),
        &CommandSubject::Task("fix-bug".to_string()),
    );

    let header = payload["blocks"][0]["text"]["text"].as_str().unwrap();
    assert!(header.contains("You have a new request"));
    assert!(header.contains("alice"));
}

#[test]
fn test_random_outcome_adds_context_block_and_rewrites_text() {
    let payload = build_notification(
        RequestKind::PerformTask,
        "U_INIT",
        &random_outcome("<@U_HUM>"),
        &CommandSubject::Task("fix-bug".to_string()),
    );

    let blocks = payload["blocks"].as_array().unwrap();
    assert_eq!(blocks.len(), 3, "Random pick should append a context block");
    assert_eq!(blocks[2]["type"], "context");
    assert!(
        blocks[2]["elements"][0]["text"]
            .as_str()
            .unwrap()
            .contains("randomly chosen")
    );

    let text = payload["text"].as_str().unwrap();
    assert!(
        text.contains("picked randomly"),
        "Top-level text should credit the random pick: {text}"
    );
}

#[test]
fn test_explicit_outcome_has_no_context_block() {
    let payload = build_notification(
        RequestKind::ReviewPullRequest,
        "U_INIT",
        &explicit_outcome("alice"),
        &CommandSubject::Link("https://github.com/org/repo/pull/42".to_string()),
    );

    let blocks = payload["blocks"].as_array().unwrap();
    assert_eq!(blocks.len(), 2);

    let text = payload["text"].as_str().unwrap();
    assert!(text.contains("was requested to take a look at"));
    assert!(!text.contains("picked randomly"));
}

#[test]
fn test_notification_is_visible_in_channel() {
    let payload = build_notification(
        RequestKind::PerformTask,
        "U_INIT",
        &explicit_outcome("alice"),
        &CommandSubject::Task("fix-bug".to_string()),
    );

    assert_eq!(payload["response_type"], "in_channel");
}

#[test]
fn test_text_references_the_subject() {
    let payload = build_notification(
        RequestKind::PerformTask,
        "U_INIT",
        &explicit_outcome("alice"),
        &CommandSubject::Task("fix-bug".to_string()),
    );

    let text = payload["text"].as_str().unwrap();
    assert!(text.contains("fix-bug"));
}
