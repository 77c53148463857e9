//! Probe client: sends one authenticated request and classifies the outcome
// Copyright 2026 KashGuard
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use tracing::debug;
use uuid::Uuid;

use crate::config::ProbeConfig;
use crate::error::{ProbeError, ProbeResult};
use crate::outcome::ProbeOutcome;
use crate::request::{ProbeMethod, ProbeRequest};

/// Correlation id header attached to every probe request
pub const HEADER_X_REQUEST_ID: &str = "X-Request-Id";

/// Authenticated JSON probe client
///
/// One instance per configured target. Each `send` performs a single
/// attempt with a bounded timeout; there is no retry and no shared state
/// between calls.
#[derive(Debug)]
pub struct ProbeClient {
    base_url: String,
    client: reqwest::Client,
}

impl ProbeClient {
    /// Build a client against a validated base URL
    ///
    /// A malformed or non-HTTP base URL is a configuration error; nothing
    /// is sent until `send` is called.
    pub fn new(config: &ProbeConfig) -> ProbeResult<Self> {
        let parsed = reqwest::Url::parse(&config.base_url).map_err(|e| {
            ProbeError::Configuration(format!("invalid base URL '{}': {}", config.base_url, e))
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ProbeError::Configuration(format!(
                "base URL '{}' must use http or https",
                config.base_url
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                ProbeError::Configuration(format!("failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            // Paths are absolute; a trailing slash here would double up
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Send one probe request and classify the outcome
    ///
    /// Any received response, 2xx through 5xx, is a classified outcome
    /// carrying the raw body text. Transport-level failures (connection
    /// refused, DNS, timeout, broken connection mid-body) are returned as
    /// `ProbeOutcome::TransportFailure`, never raised to the caller.
    pub async fn send(&self, request: &ProbeRequest) -> ProbeResult<ProbeOutcome> {
        let url = format!("{}{}", self.base_url, request.path());
        let request_id = Uuid::new_v4().to_string();

        let mut builder = match request.method() {
            ProbeMethod::Get => self.client.get(&url),
            ProbeMethod::Post => self.client.post(&url),
        };

        builder = builder
            .header(AUTHORIZATION, format!("Bearer {}", request.bearer_token()))
            .header(CONTENT_TYPE, "application/json")
            .header(HEADER_X_REQUEST_ID, &request_id);

        if let Some(body) = request.json_body() {
            builder = builder.json(body);
        }

        debug!(
            request_id = %request_id,
            method = request.method().as_str(),
            url = %url,
            "Sending probe request"
        );

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                debug!(request_id = %request_id, error = %e, "Probe request failed in transit");
                return Ok(ProbeOutcome::TransportFailure {
                    message: e.to_string(),
                });
            }
        };

        let status = response.status().as_u16();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                return Ok(ProbeOutcome::TransportFailure {
                    message: format!("failed to read response body: {}", e),
                });
            }
        };

        debug!(request_id = %request_id, status = status, "Probe request completed");
        Ok(ProbeOutcome::from_status(status, body))
    }
}
