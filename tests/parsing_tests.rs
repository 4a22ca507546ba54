use taskmaster::api::parsing::{decode_url_component, parse_form_data};

/// Tests for webhook form-body parsing
/// These mimic the URL-encoded payloads Slack sends for slash commands.

#[test]
fn test_decode_url_component() {
    // Test URL decoding with percent-encoded characters
    let encoded = "hello%20world";
    let decoded = decode_url_component(encoded).unwrap();
    assert_eq!(decoded, "hello world");

    // Test URL decoding with plus signs representing spaces
    let encoded_plus = "hello+world";
    let decoded_plus = decode_url_component(encoded_plus).unwrap();
    assert_eq!(decoded_plus, "hello world");

    // Test decoding with special characters
    let special_chars = "test%40example.com%26param%3Dvalue";
    let decoded_special = decode_url_component(special_chars).unwrap();
    assert_eq!(decoded_special, "test@example.com&param=value");
}

#[test]
fn test_parse_form_data_success() {
    let form_data = "command=%2Fdo&text=fix-bug+alice&user_id=U123&\
                    channel_id=C123&response_url=https%3A%2F%2Fhooks.slack.com%2F";

    let event = parse_form_data(form_data).unwrap();

    assert_eq!(event.command, "/do");
    assert_eq!(event.text, "fix-bug alice");
    assert_eq!(event.user_id, "U123");
    assert_eq!(event.channel_id, "C123");
    assert_eq!(event.response_url, "https://hooks.slack.com/");
}

#[test]
fn test_parse_form_data_with_link_text() {
    let form_data = "command=%2Fgit-review&text=%3Chttps%3A%2F%2Fgithub.com%2Forg%2Frepo%2Fpull%2F42%3E&\
                    user_id=U123&channel_id=C123&response_url=https%3A%2F%2Fhooks.slack.com%2F";

    let event = parse_form_data(form_data).unwrap();

    assert_eq!(event.command, "/git-review");
    assert_eq!(event.text, "<https://github.com/org/repo/pull/42>");
}

#[test]
fn test_parse_form_data_missing_fields() {
    // Missing fields get default values rather than failing the request
    let incomplete_data = "command=%2Fdo&user_id=U123";

    let event = parse_form_data(incomplete_data).unwrap();

    assert_eq!(event.command, "/do");
    assert_eq!(event.user_id, "U123");
    assert_eq!(event.text, "");
    assert_eq!(event.channel_id, "");
    assert_eq!(event.response_url, "");
}

#[test]
fn test_parse_form_data_ignores_unknown_fields() {
    let form_data = "command=%2Fdo&text=fix-bug&user_id=U123&channel_id=C123&\
                    response_url=https%3A%2F%2Fhooks.slack.com%2F&\
                    trigger_id=123.456&team_domain=example";

    let event = parse_form_data(form_data).unwrap();

    assert_eq!(event.command, "/do");
    assert_eq!(event.text, "fix-bug");
}
