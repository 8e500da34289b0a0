//! Webhook endpoint handlers.
//!
//! The webhook handler is a single linear pass with two early exits:
//! 1. Verify the HMAC signature over the exact raw body bytes
//! 2. Parse the event and extract the prompt/response pair
//! 3. Score the pair with WithPi
//! 4. Report the score back to Helicone
//!
//! Reporting failures do not fail the webhook call; the reporter's
//! tagged outcome is the 200 response body either way.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::{error, info, warn};

use crate::event::WebhookEvent;
use crate::extract::{extract_input, extract_output};
use crate::score::{post_score, score_pair};
use crate::web::signature::verify_signature;
use crate::Config;

/// Header carrying the hex HMAC-SHA256 digest of the raw body.
pub const SIGNATURE_HEADER: &str = "helicone-signature";

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config, http: reqwest::Client) -> Self {
        Self {
            config: Arc::new(config),
            http,
        }
    }
}

// =============================================================================
// Health Check
// =============================================================================

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

// =============================================================================
// Helicone Webhook
// =============================================================================

/// Body of the 401 authentication failure response.
#[derive(Serialize)]
pub struct AuthErrorBody {
    pub status: &'static str,
    pub message: &'static str,
}

/// Body of the 500 scoring failure response.
#[derive(Serialize)]
pub struct ScoringErrorBody {
    pub error: &'static str,
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(AuthErrorBody {
            status: "error",
            message: "Invalid HMAC signature",
        }),
    )
        .into_response()
}

fn scoring_failed() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ScoringErrorBody {
            error: "Failed to process scoring",
        }),
    )
        .into_response()
}

/// Helicone webhook endpoint.
///
/// Takes the body as raw bytes: the signature covers the exact bytes
/// Helicone sent, not a re-serialized parse.
pub async fn helicone_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok());

    if !verify_signature(&state.config.helicone_webhook_secret, &body, signature) {
        warn!(body_length = body.len(), "helicone_signature_invalid");
        return unauthorized();
    }

    let event: WebhookEvent = match serde_json::from_slice(&body) {
        Ok(event) => event,
        Err(e) => {
            error!(error = %e, body_length = body.len(), "helicone_payload_invalid");
            return scoring_failed();
        }
    };

    info!(
        request_id = %event.request_id,
        model = ?event.model,
        status = ?event.status,
        "helicone_webhook_received"
    );

    let input = extract_input(&event);
    let output = extract_output(&event);

    let report = match score_pair(
        &state.http,
        &state.config.withpi_url,
        &state.config.withpi_api_key,
        &input,
        &output,
    )
    .await
    {
        Ok(report) => report,
        Err(e) => {
            error!(request_id = %event.request_id, error = %e, "scoring_failed");
            return scoring_failed();
        }
    };

    let score_url = format!(
        "{}/v1/request/{}/score",
        state.config.helicone_base_url, event.request_id
    );

    let outcome = post_score(
        &state.http,
        &score_url,
        &state.config.helicone_api_key,
        &report,
    )
    .await;

    info!(request_id = %event.request_id, "helicone_webhook_complete");

    (StatusCode::OK, Json(outcome)).into_response()
}
