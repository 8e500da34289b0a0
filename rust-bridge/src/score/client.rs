//! WithPi scoring client.
//!
//! Submits a single fixed evaluation criterion together with the
//! extracted prompt/response pair. One attempt, no retry; failure
//! propagates to the handler.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use super::ScoreReport;

/// The one evaluation criterion every pair is scored against.
pub const DEFAULT_QUESTION: &str = "Is this response helpful and accurate?";

/// A yes/no evaluation criterion with its polarity.
#[derive(Debug, Clone, Serialize)]
pub struct ScoringCriterion {
    pub is_lower_score_desirable: bool,
    pub question: String,
}

/// Request body for the WithPi scoring endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ScoringRequest {
    pub scoring_spec: Vec<ScoringCriterion>,
    pub llm_input: String,
    pub llm_output: String,
}

impl ScoringRequest {
    /// Build a request scoring `input`/`output` against the default
    /// criterion.
    pub fn new(input: &str, output: &str) -> Self {
        Self {
            scoring_spec: vec![ScoringCriterion {
                is_lower_score_desirable: false,
                question: DEFAULT_QUESTION.to_string(),
            }],
            llm_input: input.to_string(),
            llm_output: output.to_string(),
        }
    }
}

/// Reply from the scoring endpoint. Only `total_score` is consumed;
/// an absent or null value counts as zero.
#[derive(Debug, Deserialize)]
struct ScoringReply {
    #[serde(default)]
    total_score: Option<f64>,
}

/// Failure submitting a pair for scoring.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("scoring request failed: {status} {status_text}")]
    Http { status: u16, status_text: String },
    #[error("scoring request error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Score an extracted prompt/response pair.
///
/// POSTs to the WithPi endpoint with the API key in an `x-api-key`
/// header. A non-2xx reply is an error carrying the status; on success
/// the reply's `total_score` becomes a one-entry report keyed by the
/// criterion question.
pub async fn score_pair(
    client: &Client,
    url: &str,
    api_key: &str,
    input: &str,
    output: &str,
) -> Result<ScoreReport, ScoreError> {
    let payload = ScoringRequest::new(input, output);

    info!(
        url = url,
        input_length = input.len(),
        output_length = output.len(),
        "scoring_request_starting"
    );

    let response = client
        .post(url)
        .header("x-api-key", api_key)
        .json(&payload)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScoreError::Http {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("unknown").to_string(),
        });
    }

    let reply: ScoringReply = response.json().await?;
    let total_score = reply.total_score.unwrap_or(0.0);

    info!(total_score = total_score, "scoring_request_complete");

    let mut report = ScoreReport::new();
    report.insert(DEFAULT_QUESTION.to_string(), total_score);
    Ok(report)
}
