//! Review API client against a stub server.

use super::helpers::{ok, test_config, StubServer, PRACTICUM_TEST_TOKEN};
use review_relay::api::{PracticumClient, ReviewSource};
use review_relay::FetchError;
use serde_json::json;

const UNUSED_TELEGRAM: &str = "http://127.0.0.1:9";
const NO_UPDATES: &str = r#"{"homeworks": [], "current_date": 1000}"#;

#[test]
fn test_fetch_sends_oauth_header_and_from_date() {
    let server = StubServer::start(vec![ok(NO_UPDATES)]);
    let client = PracticumClient::new(&test_config(&server.url, UNUSED_TELEGRAM)).unwrap();

    let payload = client.fetch(1_700_000_000).expect("Should fetch payload");

    assert_eq!(payload, json!({"homeworks": [], "current_date": 1000}));

    let request = server.next_request().expect("Server should see a request");
    assert_eq!(request.method, "GET");
    assert_eq!(
        request.path,
        "/api/user_api/homework_statuses/?from_date=1700000000"
    );
    assert_eq!(
        request.header("authorization"),
        Some(format!("OAuth {PRACTICUM_TEST_TOKEN}").as_str())
    );
}

#[test]
fn test_fetch_non_200_is_upstream_error() {
    let server = StubServer::start(vec![(503, r#"{"error": "maintenance"}"#.into())]);
    let client = PracticumClient::new(&test_config(&server.url, UNUSED_TELEGRAM)).unwrap();

    let err = client.fetch(0).unwrap_err();

    assert!(matches!(err, FetchError::Upstream { status: 503 }));
    assert_eq!(err.status(), Some(503));
}

#[test]
fn test_fetch_other_success_codes_are_rejected() {
    let server = StubServer::start(vec![(204, String::new())]);
    let client = PracticumClient::new(&test_config(&server.url, UNUSED_TELEGRAM)).unwrap();

    let err = client.fetch(0).unwrap_err();

    assert_eq!(err.status(), Some(204));
}

#[test]
fn test_fetch_malformed_body_is_decode_error() {
    let server = StubServer::start(vec![ok("<html>not json</html>")]);
    let client = PracticumClient::new(&test_config(&server.url, UNUSED_TELEGRAM)).unwrap();

    let err = client.fetch(0).unwrap_err();

    assert!(matches!(err, FetchError::Decode(_)));
}

#[test]
fn test_fetch_connection_refused_is_transport_error() {
    let server = StubServer::start(vec![]);
    let url = server.url.clone();
    drop(server);
    // Give the stub thread time to drop its listener.
    std::thread::sleep(std::time::Duration::from_millis(50));
    let client = PracticumClient::new(&test_config(&url, UNUSED_TELEGRAM)).unwrap();

    let err = client.fetch(0).unwrap_err();

    assert!(matches!(err, FetchError::Transport(_)));
}
