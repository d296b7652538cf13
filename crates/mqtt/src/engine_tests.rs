// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use fd_core::FakeClock;
use fd_wire::Pending;

fn sample_pending(message_id: &str, expiration: i64) -> Pending {
    Pending {
        sender_client_id: "controller".to_string(),
        receiver_client_id: "node-1".to_string(),
        message_id: message_id.to_string(),
        action: "ping".to_string(),
        timestamp: 0,
        expiration,
        payload: Vec::new(),
    }
}

#[test]
fn rejects_empty_message_id() {
    let err = Engine::<FakeClock>::validate_pending(&sample_pending("", 100), 0).unwrap_err();
    assert_eq!(err.kind, fd_core::error::ErrorKind::ConfigInvalid);
}

#[test]
fn rejects_expiration_in_the_past() {
    let err = Engine::<FakeClock>::validate_pending(&sample_pending("m1", 5), 10).unwrap_err();
    assert_eq!(err.kind, fd_core::error::ErrorKind::ConfigInvalid);
}

#[test]
fn rejects_expiration_beyond_three_days() {
    let now = 1_000;
    let too_far = now + MAX_CALL_HORIZON_SECS + 1;
    assert!(Engine::<FakeClock>::validate_pending(&sample_pending("m1", too_far), now).is_err());
}

#[test]
fn accepts_expiration_within_the_horizon() {
    let now = 1_000;
    assert!(Engine::<FakeClock>::validate_pending(&sample_pending("m1", now + 10), now).is_ok());
}

#[test]
fn connect_rejects_empty_broker_host() {
    let settings = MqttSettings {
        broker_host: String::new(),
        broker_port: 1883,
        client_id: fd_core::ClientId::from("node-1"),
        username: "node-1".to_string(),
        password: "pw".to_string(),
        topic_prefix: "frp-client".to_string(),
    };
    let result = tokio_test_block_on(Engine::connect(settings, FakeClock::new(0)));
    assert!(result.is_err());
}

/// Minimal single-threaded executor so this module doesn't need a
/// `#[tokio::test]` just to drive one `async fn` that never actually awaits
/// network I/O on the empty-host rejection path.
fn tokio_test_block_on<F: std::future::Future>(fut: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(fut)
}
