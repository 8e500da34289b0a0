//! Prompt/response extraction from a webhook event.
//!
//! Pulls one input string and one output string out of the two payload
//! shapes Helicone forwards (chat completions and legacy completions).
//! Extraction is pure and total: absent or malformed fields degrade to
//! an empty string, never an error.

use crate::event::WebhookEvent;

/// Extract the input text the LLM was asked about.
///
/// For chat completions this is the content of the most recent
/// `"user"` message. When no user message exists (or `messages` is
/// absent or empty), falls back to the flat `prompt` field.
pub fn extract_input(event: &WebhookEvent) -> String {
    if let Some(messages) = &event.request_body.messages {
        if let Some(last_user) = messages.iter().rev().find(|m| m.role == "user") {
            return last_user.content.clone();
        }
    }

    event.request_body.prompt.clone().unwrap_or_default()
}

/// Extract the completion text the LLM produced.
///
/// Only the first candidate is inspected: a non-empty chat
/// `message.content` wins, then that same candidate's flat `text`.
/// Later candidates are never consulted.
pub fn extract_output(event: &WebhookEvent) -> String {
    let first = match &event.response_body.choices {
        Some(choices) => match choices.first() {
            Some(choice) => choice,
            None => return String::new(),
        },
        None => return String::new(),
    };

    if let Some(message) = &first.message {
        if !message.content.is_empty() {
            return message.content.clone();
        }
    }

    match &first.text {
        Some(text) if !text.is_empty() => text.clone(),
        _ => String::new(),
    }
}
