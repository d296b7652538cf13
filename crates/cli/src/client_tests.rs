// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::time::Duration;

async fn test_client() -> ControllerClient {
    let settings = MqttSettings {
        broker_host: "127.0.0.1".into(),
        broker_port: 1,
        client_id: ClientId::from("controller-1"),
        username: "controller-1".into(),
        password: "pw".into(),
        topic_prefix: "frp".into(),
    };
    tokio::time::timeout(Duration::from_secs(5), ControllerClient::connect(settings))
        .await
        .expect("connect should not hang without a broker")
        .unwrap()
}

#[tokio::test]
async fn ping_times_out_against_an_unreachable_node() {
    let client = test_client().await;
    let err = client.ping(&ClientId::from("node-1")).await.unwrap_err();
    assert_eq!(err.kind, fd_core::error::ErrorKind::Timeout);
}

#[tokio::test]
async fn update_does_not_wait_for_a_reply() {
    let client = test_client().await;
    tokio::time::timeout(
        Duration::from_secs(1),
        client.update(&ClientId::from("node-1"), "t1", "0.58.0", "", "[common]\n".into(), "pw"),
    )
    .await
    .expect("update must not block on a reply")
    .unwrap();
}
