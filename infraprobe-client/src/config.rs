//! Probe client configuration

use serde::Deserialize;
use std::env;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Probe client configuration
///
/// The bearer token is supplied externally (environment or CLI flag) and
/// treated as an opaque string; validity and expiry are the service's
/// responsibility.
#[derive(Debug, Clone, Deserialize)]
pub struct ProbeConfig {
    pub base_url: String,
    pub token: String,
    pub timeout_seconds: u64,
}

impl ProbeConfig {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }

    /// Load configuration from environment variables
    ///
    /// Reads `INFRAPROBE_BASE_URL`, `INFRAPROBE_TOKEN`, and
    /// `INFRAPROBE_TIMEOUT`. The token has no default; a probe without a
    /// token cannot be built.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        // Load .env file if it exists
        let _ = dotenvy::dotenv();

        let base_url = env::var("INFRAPROBE_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let token = env::var("INFRAPROBE_TOKEN")
            .map_err(|_| config::ConfigError::NotFound("INFRAPROBE_TOKEN".to_string()))?;

        let timeout_seconds = env::var("INFRAPROBE_TIMEOUT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS);

        Ok(Self {
            base_url,
            token,
            timeout_seconds,
        })
    }
}
