//! Helicone webhook event types.
//!
//! Helicone posts one event per logged LLM request. The request and
//! response bodies come in two shapes: chat completions carry a
//! `messages` list (request) and a `message` per choice (response),
//! while legacy completion APIs carry a flat `prompt` and `text`.
//! Both shapes are modeled with optional fields; extraction decides
//! which one is authoritative.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// An inbound Helicone webhook event.
///
/// Only `request_id` is required. Everything else defaults so that
/// partial payloads still deserialize and degrade to empty extraction
/// results instead of failing the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookEvent {
    /// Unique ID for the logged request
    pub request_id: String,
    /// ISO timestamp of the original request
    #[serde(default)]
    pub created_at: Option<String>,
    /// Model name (e.g. "gpt-4")
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub prompt_tokens: Option<u64>,
    #[serde(default)]
    pub completion_tokens: Option<u64>,
    #[serde(default)]
    pub total_tokens: Option<u64>,
    /// Request latency in milliseconds
    #[serde(default)]
    pub latency: Option<f64>,
    /// "success" or "error"
    #[serde(default)]
    pub status: Option<String>,
    /// User feedback, if any; shape is provider-defined
    #[serde(default)]
    pub feedback: Option<serde_json::Value>,
    /// The original API request body sent to the LLM provider
    #[serde(default)]
    pub request_body: RequestBody,
    /// The response received from the LLM provider
    #[serde(default)]
    pub response_body: ResponseBody,
    /// Custom properties added during the request
    #[serde(default)]
    pub properties: HashMap<String, String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub user_properties: Option<HashMap<String, String>>,
}

/// The original LLM request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestBody {
    #[serde(default)]
    pub model: Option<String>,
    /// Ordered conversation turns (chat completions)
    #[serde(default)]
    pub messages: Option<Vec<Message>>,
    /// Flat prompt string (legacy completion APIs)
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub max_tokens: Option<u64>,
}

/// A single role/content conversation turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// "system", "user", or "assistant"
    pub role: String,
    #[serde(default)]
    pub content: String,
}

/// The LLM provider's response body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponseBody {
    #[serde(default)]
    pub choices: Option<Vec<Choice>>,
}

/// One candidate completion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Choice {
    /// Chat completion shape
    #[serde(default)]
    pub message: Option<ChoiceMessage>,
    /// Legacy completion shape
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// The message of a chat-shaped candidate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: String,
}
