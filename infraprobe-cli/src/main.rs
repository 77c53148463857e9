//! infraprobe CLI
//!
//! Smoke-tests the MPC infrastructure API: list keys, derive a child key,
//! sign a message, and hit the management liveness/readiness endpoints.
//! Prints the classified outcome verbatim and maps it to the exit code
//! (0 success, 1 HTTP failure, 2 transport or configuration failure).
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


use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use std::env;
use tracing::error;

use infraprobe_client::config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECONDS};
use infraprobe_client::{
    endpoints, DeriveKeyRequest, ProbeClient, ProbeConfig, ProbeOutcome, ProbeRequest,
    ProbeResult, SignRequest,
};

// Pre-flight failures never reached the service, same bucket as transport
const PREFLIGHT_EXIT_CODE: i32 = 2;

#[derive(Parser)]
#[command(name = "infraprobe")]
#[command(about = "Probe client for the MPC infrastructure API")]
#[command(version)]
struct Cli {
    /// Base URL of the service (falls back to INFRAPROBE_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Bearer token (falls back to INFRAPROBE_TOKEN)
    #[arg(long)]
    token: Option<String>,

    /// Request timeout in seconds (falls back to INFRAPROBE_TIMEOUT)
    #[arg(long)]
    timeout: Option<u64>,

    /// Enable debug logging
    #[arg(long, short)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List keys known to the service
    ListKeys,
    /// Derive a child key from a root key
    Derive {
        #[arg(long)]
        root_key_id: String,
        #[arg(long, default_value = "ethereum")]
        chain_type: String,
        /// Derivation index
        #[arg(long)]
        index: u32,
        #[arg(long, default_value = "")]
        description: String,
        /// Tag attached to the derived key, as key=value (repeatable)
        #[arg(long = "tag", value_parser = parse_tag)]
        tags: Vec<(String, String)>,
    },
    /// Sign a message with a managed key
    Sign {
        #[arg(long)]
        key_id: String,
        /// Plaintext message, base64-encoded before transmission
        #[arg(long)]
        message: String,
        #[arg(long, default_value = "message")]
        message_type: String,
        #[arg(long, default_value = "ethereum")]
        chain_type: String,
    },
    /// Probe the management liveness endpoint
    Liveness,
    /// Probe the management readiness endpoint
    Readiness,
}

fn parse_tag(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("invalid tag '{}', expected key=value", s))
}

fn resolve_config(cli: &Cli) -> anyhow::Result<ProbeConfig> {
    let base_url = cli
        .base_url
        .clone()
        .or_else(|| env::var("INFRAPROBE_BASE_URL").ok())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let token = cli
        .token
        .clone()
        .or_else(|| env::var("INFRAPROBE_TOKEN").ok())
        .ok_or_else(|| anyhow!("no bearer token: pass --token or set INFRAPROBE_TOKEN"))?;

    let timeout_seconds = match cli.timeout {
        Some(timeout) => timeout,
        None => match env::var("INFRAPROBE_TIMEOUT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("invalid INFRAPROBE_TIMEOUT '{}'", raw))?,
            Err(_) => DEFAULT_TIMEOUT_SECONDS,
        },
    };

    Ok(ProbeConfig {
        base_url,
        token,
        timeout_seconds,
    })
}

fn build_request(command: &Commands, token: &str) -> ProbeResult<ProbeRequest> {
    match command {
        Commands::ListKeys => endpoints::list_keys(token),
        Commands::Derive {
            root_key_id,
            chain_type,
            index,
            description,
            tags,
        } => {
            let payload = DeriveKeyRequest {
                root_key_id: root_key_id.clone(),
                chain_type: chain_type.clone(),
                index: *index,
                description: description.clone(),
                tags: tags.iter().cloned().collect(),
            };
            endpoints::derive_key(token, &payload)
        }
        Commands::Sign {
            key_id,
            message,
            message_type,
            chain_type,
        } => {
            let payload = SignRequest::from_plaintext(key_id, message, message_type, chain_type);
            endpoints::sign(token, &payload)
        }
        Commands::Liveness => endpoints::liveness(token),
        Commands::Readiness => endpoints::readiness(token),
    }
}

fn report(outcome: &ProbeOutcome) {
    match outcome {
        ProbeOutcome::Success { status, body } | ProbeOutcome::HttpFailure { status, body } => {
            println!("Status: {}", status);
            println!("Body: {}", body);
        }
        ProbeOutcome::TransportFailure { message } => {
            println!("Error: {}", message);
        }
    }
}

async fn run(cli: Cli) -> i32 {
    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {:#}", e);
            return PREFLIGHT_EXIT_CODE;
        }
    };

    let client = match ProbeClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            error!("{}", e);
            return PREFLIGHT_EXIT_CODE;
        }
    };

    let request = match build_request(&cli.command, &config.token) {
        Ok(request) => request,
        Err(e) => {
            error!("{}", e);
            return PREFLIGHT_EXIT_CODE;
        }
    };

    match client.send(&request).await {
        Ok(outcome) => {
            report(&outcome);
            outcome.exit_code()
        }
        Err(e) => {
            error!("{}", e);
            PREFLIGHT_EXIT_CODE
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load .env before reading any configuration
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let default_level = if cli.verbose { "debug" } else { "info" };
    infraprobe_logging::init_console_logging("infraprobe", default_level);

    std::process::exit(run(cli).await);
}
