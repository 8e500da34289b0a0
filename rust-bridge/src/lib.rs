//! Scorehook - Helicone to WithPi scoring bridge.
//!
//! A stateless webhook receiver: Helicone posts one event per logged
//! LLM request, scorehook authenticates it, extracts the
//! prompt/response pair, scores the pair with WithPi, and posts the
//! score back to Helicone's per-request scoring endpoint.
//!
//! ## Request flow
//!
//! ```text
//! Helicone webhook → verify HMAC → extract pair → WithPi score → Helicone report
//! ```

pub mod config;
pub mod event;
pub mod extract;
pub mod score;
pub mod web;

// Re-export commonly used types
pub use config::Config;
pub use event::WebhookEvent;
pub use extract::{extract_input, extract_output};
pub use score::{post_score, score_pair, ReportOutcome, ScoreError, ScoreReport};
pub use web::{router, AppState};
