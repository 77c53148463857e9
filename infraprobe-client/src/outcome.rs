//! Outcome classification for probe requests
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


/// Classified result of a single probe request
///
/// Exactly one variant is produced per call. Response bodies are carried
/// as raw text so callers can inspect service-specific error payloads
/// without this layer guessing a response schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Response received with a status in [200, 299]
    Success { status: u16, body: String },
    /// Response received with any other status
    HttpFailure { status: u16, body: String },
    /// No usable response: connection refused, DNS failure, timeout, or
    /// the connection broke while reading the body
    TransportFailure { message: String },
}

impl ProbeOutcome {
    /// Classify a received response by status code
    pub fn from_status(status: u16, body: String) -> Self {
        if (200..=299).contains(&status) {
            ProbeOutcome::Success { status, body }
        } else {
            ProbeOutcome::HttpFailure { status, body }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ProbeOutcome::Success { .. })
    }

    /// Process exit code for CLI reporting: 0 success, 1 HTTP failure,
    /// 2 transport failure
    pub fn exit_code(&self) -> i32 {
        match self {
            ProbeOutcome::Success { .. } => 0,
            ProbeOutcome::HttpFailure { .. } => 1,
            ProbeOutcome::TransportFailure { .. } => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_in_2xx_range_classify_as_success() {
        assert!(ProbeOutcome::from_status(200, String::new()).is_success());
        assert!(ProbeOutcome::from_status(204, String::new()).is_success());
        assert!(ProbeOutcome::from_status(299, String::new()).is_success());
    }

    #[test]
    fn statuses_outside_2xx_range_classify_as_http_failure() {
        for status in [199, 300, 401, 404, 500] {
            let outcome = ProbeOutcome::from_status(status, "body".to_string());
            assert_eq!(
                outcome,
                ProbeOutcome::HttpFailure {
                    status,
                    body: "body".to_string()
                }
            );
        }
    }

    #[test]
    fn classification_preserves_body_verbatim() {
        let body = "{\"error\":\"invalid token\"}".to_string();
        let outcome = ProbeOutcome::from_status(401, body.clone());
        assert_eq!(outcome, ProbeOutcome::HttpFailure { status: 401, body });
    }

    #[test]
    fn exit_codes_map_per_variant() {
        let success = ProbeOutcome::from_status(200, String::new());
        let http_failure = ProbeOutcome::from_status(503, String::new());
        let transport = ProbeOutcome::TransportFailure {
            message: "connection refused".to_string(),
        };
        assert_eq!(success.exit_code(), 0);
        assert_eq!(http_failure.exit_code(), 1);
        assert_eq!(transport.exit_code(), 2);
    }
}
