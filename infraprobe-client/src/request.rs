//! Probe request model and construction invariants
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


use serde_json::Value;

use crate::error::{ProbeError, ProbeResult};

/// HTTP methods the probe surface uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeMethod {
    Get,
    Post,
}

impl ProbeMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProbeMethod::Get => "GET",
            ProbeMethod::Post => "POST",
        }
    }
}

/// A single authenticated probe request
///
/// Construction enforces the request invariants: the bearer token is
/// non-empty, GET carries no body, POST carries one. A request that fails
/// these checks never reaches the network.
#[derive(Debug, Clone)]
pub struct ProbeRequest {
    method: ProbeMethod,
    path: String,
    bearer_token: String,
    json_body: Option<Value>,
}

impl ProbeRequest {
    pub fn new(
        method: ProbeMethod,
        path: impl Into<String>,
        bearer_token: impl Into<String>,
        json_body: Option<Value>,
    ) -> ProbeResult<Self> {
        let bearer_token = bearer_token.into();
        if bearer_token.is_empty() {
            return Err(ProbeError::Configuration(
                "bearer token must not be empty".to_string(),
            ));
        }

        match (method, &json_body) {
            (ProbeMethod::Get, Some(_)) => {
                return Err(ProbeError::Configuration(
                    "GET request must not carry a JSON body".to_string(),
                ));
            }
            (ProbeMethod::Post, None) => {
                return Err(ProbeError::Configuration(
                    "POST request requires a JSON body".to_string(),
                ));
            }
            _ => {}
        }

        Ok(Self {
            method,
            path: path.into(),
            bearer_token,
            json_body,
        })
    }

    /// Build an authenticated GET request
    pub fn get(path: impl Into<String>, bearer_token: impl Into<String>) -> ProbeResult<Self> {
        Self::new(ProbeMethod::Get, path, bearer_token, None)
    }

    /// Build an authenticated POST request with a JSON body
    pub fn post(
        path: impl Into<String>,
        bearer_token: impl Into<String>,
        json_body: Value,
    ) -> ProbeResult<Self> {
        Self::new(ProbeMethod::Post, path, bearer_token, Some(json_body))
    }

    pub fn method(&self) -> ProbeMethod {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn bearer_token(&self) -> &str {
        &self.bearer_token
    }

    pub fn json_body(&self) -> Option<&Value> {
        self.json_body.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn get_request_without_body_is_valid() {
        let request = ProbeRequest::get("/api/v1/infra/keys", "token").expect("valid request");
        assert_eq!(request.method(), ProbeMethod::Get);
        assert_eq!(request.path(), "/api/v1/infra/keys");
        assert!(request.json_body().is_none());
    }

    #[test]
    fn post_request_with_body_is_valid() {
        let request = ProbeRequest::post("/api/v1/infra/sign", "token", json!({"key_id": "k1"}))
            .expect("valid request");
        assert_eq!(request.method(), ProbeMethod::Post);
        assert_eq!(request.json_body(), Some(&json!({"key_id": "k1"})));
    }

    #[test]
    fn empty_bearer_token_is_rejected() {
        let err = ProbeRequest::get("/api/v1/infra/keys", "").expect_err("must reject");
        assert!(matches!(err, ProbeError::Configuration(_)));
    }

    #[test]
    fn get_with_body_is_rejected() {
        let err = ProbeRequest::new(
            ProbeMethod::Get,
            "/api/v1/infra/keys",
            "token",
            Some(json!({"unexpected": true})),
        )
        .expect_err("must reject");
        assert!(matches!(err, ProbeError::Configuration(_)));
    }

    #[test]
    fn post_without_body_is_rejected() {
        let err = ProbeRequest::new(ProbeMethod::Post, "/api/v1/infra/sign", "token", None)
            .expect_err("must reject");
        assert!(matches!(err, ProbeError::Configuration(_)));
    }

    #[test]
    fn method_names_match_wire_format() {
        assert_eq!(ProbeMethod::Get.as_str(), "GET");
        assert_eq!(ProbeMethod::Post.as_str(), "POST");
    }
}
