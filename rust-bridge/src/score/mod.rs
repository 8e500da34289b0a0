//! Scoring integration module.
//!
//! Two outbound calls live here:
//! - `client`: submits an extracted prompt/response pair to WithPi and
//!   normalizes the reply into a [`ScoreReport`].
//! - `reporter`: posts the report back to Helicone's per-request
//!   scoring endpoint, capturing the outcome as data instead of an
//!   error.

pub mod client;
pub mod reporter;

use std::collections::HashMap;

pub use client::{score_pair, ScoreError, ScoringCriterion, ScoringRequest, DEFAULT_QUESTION};
pub use reporter::{post_score, ReportOutcome};

/// Scores keyed by criterion question, as Helicone expects them.
pub type ScoreReport = HashMap<String, f64>;
