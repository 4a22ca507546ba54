use percent_encoding::percent_decode_str;
use std::collections::HashMap;

use crate::core::models::SlashCommandEvent;
use crate::errors::RelayError;

/// Decodes a URL-encoded string using the percent_encoding crate.
///
/// # Arguments
/// * `input` - The URL-encoded string to decode
///
/// # Returns
/// * `Ok(String)` - The decoded string if successful
/// * `Err(String)` - An error message if decoding fails
///
/// # Examples
///
/// ```
/// use taskmaster::api::parsing::decode_url_component;
///
/// let encoded = "hello%20world";
/// let decoded = decode_url_component(encoded).unwrap();
/// assert_eq!(decoded, "hello world");
///
/// let encoded_plus = "hello+world";
/// let decoded_plus = decode_url_component(encoded_plus).unwrap();
/// assert_eq!(decoded_plus, "hello world");
/// ```
pub fn decode_url_component(input: &str) -> Result<String, String> {
    percent_decode_str(input)
        .decode_utf8()
        .map(|s| s.replace('+', " "))
        .map_err(|e| format!("Failed to decode URL component: {}", e))
        .map(|s| s.to_string())
}

/// Parses the URL-encoded form body of a slash-command webhook.
///
/// # Examples
///
/// ```
/// use taskmaster::api::parsing::parse_form_data;
///
/// let form_data = "command=%2Fdo&text=fix-bug+alice&user_id=U123&\
///                  channel_id=C123&response_url=https%3A%2F%2Fhooks.slack.com%2F";
///
/// let event = parse_form_data(form_data).unwrap();
/// assert_eq!(event.command, "/do");
/// assert_eq!(event.text, "fix-bug alice");
/// assert_eq!(event.response_url, "https://hooks.slack.com/");
/// ```
///
/// # Errors
///
/// Returns an error if a key or value fails URL decoding.
pub fn parse_form_data(form_data: &str) -> Result<SlashCommandEvent, RelayError> {
    let mut map: HashMap<String, String> = HashMap::new();

    for pair in form_data.split('&') {
        if let Some(idx) = pair.find('=') {
            let key = decode_url_component(&pair[..idx])
                .map_err(|e| RelayError::ParseError(format!("Failed to decode key: {}", e)))?;

            let value = decode_url_component(&pair[idx + 1..])
                .map_err(|e| RelayError::ParseError(format!("Failed to decode value: {}", e)))?;

            map.insert(key, value);
        }
    }

    Ok(SlashCommandEvent {
        command: map.get("command").cloned().unwrap_or_default(),
        text: map.get("text").cloned().unwrap_or_default(),
        user_id: map.get("user_id").cloned().unwrap_or_default(),
        channel_id: map.get("channel_id").cloned().unwrap_or_default(),
        response_url: map.get("response_url").cloned().unwrap_or_default(),
    })
}
