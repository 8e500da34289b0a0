//! Configuration module for environment variable parsing.
//!
//! All configuration is read once at startup. The three secrets are
//! required: a missing secret aborts the process before the server
//! binds, rather than surfacing later as a per-request failure.

use std::env;

use anyhow::{Context, Result};

/// Default WithPi scoring endpoint.
pub const DEFAULT_WITHPI_URL: &str = "https://api.withpi.ai/v1/scoring_system/score";

/// Default Helicone API base URL.
pub const DEFAULT_HELICONE_BASE_URL: &str = "https://api.helicone.ai";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// WithPi API key, sent as an `x-api-key` header on scoring calls
    pub withpi_api_key: String,

    /// Helicone API key, sent as a bearer token when reporting scores
    pub helicone_api_key: String,

    /// Shared secret used to verify inbound webhook signatures
    pub helicone_webhook_secret: String,

    /// WithPi scoring endpoint URL
    pub withpi_url: String,

    /// Helicone API base URL (scores are posted to
    /// `<base>/v1/request/<request_id>/score`)
    pub helicone_base_url: String,

    /// Port for the web server to listen on
    pub port: u16,

    /// HTTP request timeout in milliseconds for outbound calls
    pub request_timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Fails if any of the three required secrets is absent or empty.
    pub fn from_env() -> Result<Self> {
        Ok(Config {
            withpi_api_key: require("WITHPI_API_KEY")?,

            helicone_api_key: require("HELICONE_API_KEY")?,

            helicone_webhook_secret: require("HELICONE_WEBHOOK_SECRET")?,

            withpi_url: env::var("WITHPI_API_URL")
                .unwrap_or_else(|_| DEFAULT_WITHPI_URL.to_string()),

            helicone_base_url: env::var("HELICONE_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_HELICONE_BASE_URL.to_string()),

            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),

            request_timeout_ms: env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
        })
    }
}

/// Read a required environment variable, rejecting empty values.
fn require(name: &str) -> Result<String> {
    let value = env::var(name).with_context(|| format!("{} is not configured", name))?;
    if value.trim().is_empty() {
        anyhow::bail!("{} is not configured", name);
    }
    Ok(value)
}
