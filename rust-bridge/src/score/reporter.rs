//! Score reporting back to Helicone.
//!
//! Unlike the scoring client, the reporter never fails: the webhook
//! call already succeeded once a score exists, so reporting problems
//! are carried as a tagged outcome in the response body rather than
//! failing the request. A 4xx/5xx from Helicone is still a `Success`
//! outcome holding that status; only transport or body-parse failures
//! become `Error`.

use reqwest::Client;
use serde::Serialize;
use tracing::{error, info};

use super::ScoreReport;

/// Outcome of posting scores back to Helicone.
#[derive(Debug, Serialize)]
#[serde(tag = "status")]
pub enum ReportOutcome {
    Success {
        #[serde(rename = "responseStatusCode")]
        response_status_code: u16,
        #[serde(rename = "responseBody")]
        response_body: serde_json::Value,
    },
    Error {
        message: String,
    },
}

#[derive(Serialize)]
struct ScorePayload<'a> {
    scores: &'a ScoreReport,
}

/// Post a score report to a Helicone per-request scoring endpoint.
pub async fn post_score(
    client: &Client,
    url: &str,
    api_key: &str,
    scores: &ScoreReport,
) -> ReportOutcome {
    let result = async {
        let response = client
            .post(url)
            .bearer_auth(api_key)
            .json(&ScorePayload { scores })
            .send()
            .await?;

        let status = response.status().as_u16();
        let body: serde_json::Value = response.json().await?;
        Ok::<_, reqwest::Error>((status, body))
    }
    .await;

    match result {
        Ok((status, body)) => {
            info!(url = url, response_status = status, "score_report_delivered");
            ReportOutcome::Success {
                response_status_code: status,
                response_body: body,
            }
        }
        Err(e) => {
            error!(url = url, error = %e, "score_report_failed");
            ReportOutcome::Error {
                message: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::DEFAULT_QUESTION;

    fn report(score: f64) -> ScoreReport {
        let mut report = ScoreReport::new();
        report.insert(DEFAULT_QUESTION.to_string(), score);
        report
    }

    #[test]
    fn test_outcome_wire_shapes() {
        let success = ReportOutcome::Success {
            response_status_code: 200,
            response_body: serde_json::json!({"ok": true}),
        };
        let json = serde_json::to_value(&success).unwrap();
        assert_eq!(json["status"], "Success");
        assert_eq!(json["responseStatusCode"], 200);
        assert_eq!(json["responseBody"]["ok"], true);

        let error = ReportOutcome::Error {
            message: "connection refused".to_string(),
        };
        let json = serde_json::to_value(&error).unwrap();
        assert_eq!(json["status"], "Error");
        assert_eq!(json["message"], "connection refused");
    }

    #[tokio::test]
    async fn test_post_score_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/request/req-1/score")
            .match_header("authorization", "Bearer hel-key")
            .match_body(mockito::Matcher::PartialJson(serde_json::json!({
                "scores": {DEFAULT_QUESTION: 0.82}
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"received": true}"#)
            .create_async()
            .await;

        let client = Client::new();
        let url = format!("{}/v1/request/req-1/score", server.url());
        let outcome = post_score(&client, &url, "hel-key", &report(0.82)).await;

        match outcome {
            ReportOutcome::Success {
                response_status_code,
                response_body,
            } => {
                assert_eq!(response_status_code, 200);
                assert_eq!(response_body["received"], true);
            }
            other => panic!("expected Success, got {:?}", other),
        }
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_post_score_remote_error_is_still_success_tagged() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/v1/request/req-1/score")
            .with_status(500)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error": "internal"}"#)
            .create_async()
            .await;

        let client = Client::new();
        let url = format!("{}/v1/request/req-1/score", server.url());
        let outcome = post_score(&client, &url, "hel-key", &report(0.5)).await;

        match outcome {
            ReportOutcome::Success {
                response_status_code,
                ..
            } => assert_eq!(response_status_code, 500),
            other => panic!("expected Success, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_post_score_transport_failure_is_error_tagged() {
        let client = Client::new();
        // Nothing listens on this port.
        let outcome = post_score(
            &client,
            "http://127.0.0.1:1/v1/request/req-1/score",
            "hel-key",
            &report(0.5),
        )
        .await;

        match outcome {
            ReportOutcome::Error { message } => assert!(!message.is_empty()),
            other => panic!("expected Error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_post_score_unparseable_body_is_error_tagged() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/v1/request/req-1/score")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let client = Client::new();
        let url = format!("{}/v1/request/req-1/score", server.url());
        let outcome = post_score(&client, &url, "hel-key", &report(0.5)).await;

        assert!(matches!(outcome, ReportOutcome::Error { .. }));
    }
}
