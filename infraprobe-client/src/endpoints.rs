//! Endpoint catalog for the consumed infrastructure API surface
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


use crate::error::ProbeResult;
use crate::payloads::{DeriveKeyRequest, SignRequest};
use crate::request::ProbeRequest;

pub const LIST_KEYS_PATH: &str = "/api/v1/infra/keys";
pub const DERIVE_KEY_PATH: &str = "/api/v1/infra/keys/derive";
pub const SIGN_PATH: &str = "/api/v1/infra/sign";

// Management endpoints
pub const LIVENESS_PATH: &str = "/-/healthy";
pub const READINESS_PATH: &str = "/-/ready";

/// List keys known to the service
pub fn list_keys(token: &str) -> ProbeResult<ProbeRequest> {
    ProbeRequest::get(LIST_KEYS_PATH, token)
}

/// Derive a child key from a root key
pub fn derive_key(token: &str, request: &DeriveKeyRequest) -> ProbeResult<ProbeRequest> {
    ProbeRequest::post(DERIVE_KEY_PATH, token, serde_json::to_value(request)?)
}

/// Sign a message with a managed key
pub fn sign(token: &str, request: &SignRequest) -> ProbeResult<ProbeRequest> {
    ProbeRequest::post(SIGN_PATH, token, serde_json::to_value(request)?)
}

/// Probe the service liveness endpoint
pub fn liveness(token: &str) -> ProbeResult<ProbeRequest> {
    ProbeRequest::get(LIVENESS_PATH, token)
}

/// Probe the service readiness endpoint
pub fn readiness(token: &str) -> ProbeResult<ProbeRequest> {
    ProbeRequest::get(READINESS_PATH, token)
}
