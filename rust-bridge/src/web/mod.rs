//! Web server module for the webhook receiver.
//!
//! A thin axum server with two routes: a health check and the Helicone
//! webhook endpoint. Router construction lives here so integration
//! tests exercise the same stack the binary serves.

pub mod handlers;
pub mod signature;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub use handlers::{health, helicone_webhook, AppState, HealthResponse, SIGNATURE_HEADER};
pub use signature::verify_signature;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/webhooks/helicone", post(helicone_webhook))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
