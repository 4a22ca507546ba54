//! Notification payload construction.
//!
//! Pure functions building the Block Kit message posted to the command's
//! `response_url` once resolution completes.

use serde_json::{Value, json};

use crate::core::models::{AssignmentOutcome, CommandSubject, RequestKind};

/// Build the in-channel notification for a resolved request.
///
/// The message carries a header section naming the assignee, a fields section
/// with the request type, the subject (task or link) and the initiator, and -
/// for random picks - a context block crediting the random selection.
#[must_use]
pub fn build_notification(
    kind: RequestKind,
    initiator_id: &str,
    outcome: &AssignmentOutcome,
    subject: &CommandSubject,
) -> Value {
    let subject_field = match subject {
        CommandSubject::Task(task) => json!({
            "type": "mrkdwn",
            "text": format!("*Task :rocket:*\n {task}")
        }),
        CommandSubject::Link(link) => json!({
            "type": "mrkdwn",
            "text": format!("*Link / Thread :rocket:*\n {link}")
        }),
    };

    let text = if outcome.was_random {
        format!(
            ":computer: {} was picked randomly by me :robot_face: to take a look at {} :eyes:.\n Request initiated by <@{}> :saluting_face:",
            outcome.assignee,
            subject.as_str(),
            initiator_id
        )
    } else {
        format!(
            ":computer: {} was requested to take a look at {} :eyes:.\n Request initiated by <@{}> :saluting_face:",
            outcome.assignee,
            subject.as_str(),
            initiator_id
        )
    };

    let mut blocks = vec![
        json!({
            "type": "section",
            "text": {
                "type": "mrkdwn",
                "text": format!("*You have a new request :gift:*\n {}", outcome.assignee)
            }
        }),
        json!({
            "type": "section",
            "fields": [
                {
                    "type": "mrkdwn",
                    "text": format!("*Type*\n {}", kind.display_label())
                },
                subject_field,
                {
                    "type": "mrkdwn",
                    "text": format!("*Requested By:*\n <@{initiator_id}>")
                }
            ]
        }),
    ];

    if outcome.was_random {
        blocks.push(json!({
            "type": "context",
            "elements": [
                {
                    "type": "mrkdwn",
                    "text": ":game_die: The user was randomly chosen by :robot_face:"
                }
            ]
        }));
    }

    json!({
        "response_type": "in_channel",
        "text": text,
        "blocks": blocks,
    })
}
