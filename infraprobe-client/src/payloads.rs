//! Domain payload types for the infrastructure API
//!
//! These shapes are consumed by the service, not owned here: the probe
//! serializes them faithfully and treats whatever comes back as opaque
//! text.
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


use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Request body for `POST /api/v1/infra/keys/derive`
///
/// Asks the service to derive a child key from a root key at the given
/// index for a chain. The chain type is passed through as a string so the
/// probe never constrains what the service accepts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeriveKeyRequest {
    pub root_key_id: String,
    pub chain_type: String,
    pub index: u32,
    pub description: String,
    pub tags: HashMap<String, String>,
}

/// Request body for `POST /api/v1/infra/sign`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignRequest {
    pub key_id: String,
    /// Base64-encoded message bytes
    pub message: String,
    pub message_type: String,
    pub chain_type: String,
}

impl SignRequest {
    /// Build a signing request from a plaintext message
    ///
    /// The wire format carries the message as standard base64.
    pub fn from_plaintext(
        key_id: impl Into<String>,
        message: &str,
        message_type: impl Into<String>,
        chain_type: impl Into<String>,
    ) -> Self {
        Self {
            key_id: key_id.into(),
            message: BASE64.encode(message.as_bytes()),
            message_type: message_type.into(),
            chain_type: chain_type.into(),
        }
    }
}
