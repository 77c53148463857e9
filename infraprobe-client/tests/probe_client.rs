//! HTTP-level integration tests for the probe client
//!
//! Each test stands up a local mock server (or deliberately points at a
//! dead port) and asserts the classified outcome and the exact wire
//! format the client transmits.

use httpmock::prelude::*;
use serde_json::json;
use std::collections::HashMap;

use infraprobe_client::{
    endpoints, DeriveKeyRequest, ProbeClient, ProbeConfig, ProbeError, ProbeMethod, ProbeOutcome,
    ProbeRequest, SignRequest,
};

fn test_config(base_url: &str) -> ProbeConfig {
    ProbeConfig {
        base_url: base_url.to_string(),
        token: "test-token".to_string(),
        timeout_seconds: 5,
    }
}

#[tokio::test]
async fn success_carries_status_and_raw_body() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/infra/keys")
            .header("authorization", "Bearer test-token")
            .header("content-type", "application/json");
        then.status(200).body("{\"ok\":true}");
    });

    let client = ProbeClient::new(&test_config(&server.base_url())).expect("client");
    let request = endpoints::list_keys("test-token").expect("request");
    let outcome = client.send(&request).await.expect("send");

    mock.assert();
    assert_eq!(
        outcome,
        ProbeOutcome::Success {
            status: 200,
            body: "{\"ok\":true}".to_string()
        }
    );
}

#[tokio::test]
async fn non_2xx_response_is_http_failure_with_verbatim_body() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/infra/keys");
        then.status(401).body("{\"error\":\"invalid token\"}");
    });

    let client = ProbeClient::new(&test_config(&server.base_url())).expect("client");
    let request = endpoints::list_keys("test-token").expect("request");
    let outcome = client.send(&request).await.expect("send");

    assert_eq!(
        outcome,
        ProbeOutcome::HttpFailure {
            status: 401,
            body: "{\"error\":\"invalid token\"}".to_string()
        }
    );
}

#[tokio::test]
async fn derive_post_body_round_trips_as_json() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/infra/keys/derive")
            .header("authorization", "Bearer test-token")
            .json_body(json!({
                "root_key_id": "root-key-1",
                "chain_type": "ethereum",
                "index": 1,
                "description": "derived key",
                "tags": {"purpose": "system-test"}
            }));
        then.status(201).body("{\"wallet_id\":\"wallet-1\"}");
    });

    let payload = DeriveKeyRequest {
        root_key_id: "root-key-1".to_string(),
        chain_type: "ethereum".to_string(),
        index: 1,
        description: "derived key".to_string(),
        tags: HashMap::from([("purpose".to_string(), "system-test".to_string())]),
    };

    let client = ProbeClient::new(&test_config(&server.base_url())).expect("client");
    let request = endpoints::derive_key("test-token", &payload).expect("request");
    let outcome = client.send(&request).await.expect("send");

    mock.assert();
    assert!(outcome.is_success());
}

#[tokio::test]
async fn sign_post_sends_base64_encoded_message() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/v1/infra/sign").json_body(json!({
            "key_id": "wallet-1",
            "message": "SGVsbG8gTVBD",
            "message_type": "message",
            "chain_type": "ethereum"
        }));
        then.status(200).body("{\"signature\":\"0xabc\"}");
    });

    let payload = SignRequest::from_plaintext("wallet-1", "Hello MPC", "message", "ethereum");

    let client = ProbeClient::new(&test_config(&server.base_url())).expect("client");
    let request = endpoints::sign("test-token", &payload).expect("request");
    let outcome = client.send(&request).await.expect("send");

    mock.assert();
    assert_eq!(
        outcome,
        ProbeOutcome::Success {
            status: 200,
            body: "{\"signature\":\"0xabc\"}".to_string()
        }
    );
}

#[tokio::test]
async fn get_requests_transmit_no_body() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/-/healthy").body("");
        then.status(200).body("ready");
    });

    let client = ProbeClient::new(&test_config(&server.base_url())).expect("client");
    let request = endpoints::liveness("test-token").expect("request");
    let outcome = client.send(&request).await.expect("send");

    mock.assert();
    assert!(outcome.is_success());
}

#[tokio::test]
async fn unreachable_server_is_transport_failure() {
    // Bind then drop a listener so the port is known dead
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let client = ProbeClient::new(&test_config(&format!("http://{}", addr))).expect("client");
    let request = endpoints::list_keys("test-token").expect("request");
    let outcome = client.send(&request).await.expect("send");

    match outcome {
        ProbeOutcome::TransportFailure { message } => assert!(!message.is_empty()),
        other => panic!("expected transport failure, got {:?}", other),
    }
}

#[tokio::test]
async fn stalled_response_times_out_as_transport_failure() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/infra/keys");
        then.status(200)
            .body("{}")
            .delay(std::time::Duration::from_secs(3));
    });

    let mut config = test_config(&server.base_url());
    config.timeout_seconds = 1;

    let client = ProbeClient::new(&config).expect("client");
    let request = endpoints::list_keys("test-token").expect("request");
    let outcome = client.send(&request).await.expect("send");

    assert!(matches!(outcome, ProbeOutcome::TransportFailure { .. }));
}

#[test]
fn empty_token_is_rejected_before_any_io() {
    let err = endpoints::list_keys("").expect_err("empty token must fail");
    assert!(matches!(err, ProbeError::Configuration(_)));
}

#[test]
fn get_with_body_is_rejected_at_construction() {
    let err = ProbeRequest::new(
        ProbeMethod::Get,
        "/api/v1/infra/keys",
        "test-token",
        Some(json!({"unexpected": true})),
    )
    .expect_err("must reject");
    assert!(matches!(err, ProbeError::Configuration(_)));
}
