//! Authenticated HTTP probe client for the KashGuard MPC infrastructure API
//!
//! Builds single bearer-authenticated JSON requests against a configured
//! base URL and classifies each outcome into success, HTTP failure, or
//! transport failure. Used by the `infraprobe` CLI to smoke-test key
//! listing, key derivation, and signing endpoints.
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


pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod outcome;
pub mod payloads;
pub mod request;

pub use client::ProbeClient;
pub use config::ProbeConfig;
pub use error::{ProbeError, ProbeResult};
pub use outcome::ProbeOutcome;
pub use payloads::{DeriveKeyRequest, SignRequest};
pub use request::{ProbeMethod, ProbeRequest};
