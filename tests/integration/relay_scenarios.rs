//! End-to-end poll cycles: review API stub in, Telegram stub out.

use super::helpers::{ok, test_config, StubServer, TELEGRAM_OK};
use review_relay::api::PracticumClient;
use review_relay::notify::TelegramNotifier;
use review_relay::{CycleError, CycleOutcome, Relay, ReviewStatus, ValidationError};
use serde_json::{json, Value};
use std::time::Duration;

type LiveRelay = Relay<PracticumClient, TelegramNotifier>;

fn frozen_clock() -> i64 {
    1_000_000
}

fn build_relay(api: &StubServer, telegram: &StubServer) -> LiveRelay {
    let config = test_config(&api.url, &telegram.url);
    Relay::with_clock(
        PracticumClient::new(&config).unwrap(),
        TelegramNotifier::new(&config).unwrap(),
        Duration::from_secs(600),
        frozen_clock,
    )
}

#[test]
fn test_no_updates_sends_nothing() {
    let body = json!({"homeworks": [], "current_date": 1000});
    let api = StubServer::start(vec![(200, body.to_string())]);
    let telegram = StubServer::start(vec![ok(TELEGRAM_OK)]);
    let mut relay = build_relay(&api, &telegram);

    let outcome = relay.run_cycle();

    assert!(matches!(outcome, CycleOutcome::Idle));
    assert_eq!(relay.cursor(), 1000);
    assert!(!telegram.received_any());
}

#[test]
fn test_status_change_is_relayed() {
    let body = json!({
        "homeworks": [{"homework_name": "proj1", "status": "approved"}],
        "current_date": 2000
    });
    let api = StubServer::start(vec![(200, body.to_string())]);
    let telegram = StubServer::start(vec![ok(TELEGRAM_OK)]);
    let mut relay = build_relay(&api, &telegram);

    let outcome = relay.run_cycle();

    match outcome {
        CycleOutcome::Notified { sent, .. } => assert!(sent),
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(relay.cursor(), 2000);

    let api_request = api.next_request().unwrap();
    assert!(api_request.path.ends_with("?from_date=1000000"));

    let verdict = ReviewStatus::Approved.verdict();
    let expected = format!("Status changed for submission \"proj1\". {verdict}");
    let sent: Value = serde_json::from_str(&telegram.next_request().unwrap().body).unwrap();
    assert_eq!(sent["text"], expected);
}

#[test]
fn test_missing_homeworks_resets_cursor() {
    let api = StubServer::start(vec![
        ok(r#"{"homeworks": [], "current_date": 1500}"#),
        ok(r#"{"current_date": 3000}"#),
    ]);
    let telegram = StubServer::start(vec![]);
    let mut relay = build_relay(&api, &telegram);

    relay.run_cycle();
    assert_eq!(relay.cursor(), 1500);

    let outcome = relay.run_cycle();

    match outcome {
        CycleOutcome::Failed(CycleError::Validation(e)) => {
            assert_eq!(e, ValidationError::MissingKey("homeworks"))
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(relay.cursor(), frozen_clock());
}

#[test]
fn test_upstream_unavailable_skips_notification() {
    let api = StubServer::start(vec![(503, "{}".into())]);
    let telegram = StubServer::start(vec![ok(TELEGRAM_OK)]);
    let mut relay = build_relay(&api, &telegram);

    let outcome = relay.run_cycle();

    match outcome {
        CycleOutcome::Failed(CycleError::Fetch(e)) => assert_eq!(e.status(), Some(503)),
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(relay.cursor(), frozen_clock());
    assert!(!telegram.received_any());
}
