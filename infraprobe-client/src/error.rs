//! Error types for the probe client
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


use thiserror::Error;

/// Probe client errors
///
/// Only problems detected before any network I/O surface as errors. HTTP
/// and transport failures are classified outcomes, not errors, so callers
/// pattern-match instead of catching.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for probe operations
pub type ProbeResult<T> = Result<T, ProbeError>;
