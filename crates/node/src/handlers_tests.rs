// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use fd_config::{NodeClient, NodeConfig, NodeConfigHolder, NodeMqtt};
use fd_core::{ClientId, SystemClock};
use fd_mqtt::MqttSettings;
use std::time::Duration;
use tempfile::tempdir;

/// Builds a `NodeAgent` for handler tests. `Engine::connect` only queues
/// broker requests onto an internal channel and never waits for a
/// handshake, so it completes even with nothing listening on the chosen
/// port; each test still wraps it in a timeout as a safety net.
async fn test_agent(base: &std::path::Path, client_password: &str) -> Arc<NodeAgent> {
    let instances_dir = base.join("instances");
    std::fs::create_dir_all(&instances_dir).unwrap();
    let binaries_dir = base.join("bin");
    std::fs::create_dir_all(&binaries_dir).unwrap();

    let node_config_path = base.join("node.yaml");
    NodeConfig {
        client: NodeClient { name: "n1".into(), client_id: "n1-id".into(), password: client_password.into() },
        mqtt: NodeMqtt {
            broker: "127.0.0.1".into(),
            client_id: "n1-id".into(),
            username: "n1-id".into(),
            password: "mqtt-pw".into(),
            topic_prefix: "frp".into(),
        },
        instances: vec![],
    }
    .save(&node_config_path)
    .unwrap();

    let settings = MqttSettings {
        broker_host: "127.0.0.1".into(),
        broker_port: 1,
        client_id: ClientId::from("n1-id"),
        username: "n1-id".into(),
        password: "mqtt-pw".into(),
        topic_prefix: "frp".into(),
    };
    let engine = tokio::time::timeout(Duration::from_secs(5), fd_mqtt::Engine::connect(settings, SystemClock))
        .await
        .expect("engine connect should not hang without a broker")
        .unwrap();

    Arc::new(NodeAgent {
        engine,
        supervisor: fd_supervisor::Supervisor::new(SystemClock),
        config: NodeConfigHolder::load(&node_config_path).unwrap(),
        installer: fd_collab::Installer::new(&binaries_dir),
        client_password: client_password.to_string(),
        instances_dir,
    })
}

fn script(dir: &std::path::Path, body: &str) -> std::path::PathBuf {
    use std::io::Write;
    use std::os::unix::fs::PermissionsExt;
    let path = dir.join("fake-frpc");
    let mut f = std::fs::File::create(&path).unwrap();
    writeln!(f, "#!/bin/sh\n{body}").unwrap();
    let mut perms = f.metadata().unwrap().permissions();
    perms.set_mode(0o755);
    f.set_permissions(perms).unwrap();
    path
}

#[tokio::test]
async fn ping_replies_with_current_time_regardless_of_input() {
    let dir = tempdir().unwrap();
    let agent = test_agent(dir.path(), "secret").await;
    let payload = fd_wire::encode(&PingPayload { time: 0 }).unwrap();
    let response = handle_ping(agent, payload).await.unwrap();
    let decoded: PingResponse = fd_wire::decode(&response).unwrap();
    assert!(decoded.time > 0);
}

#[tokio::test]
async fn update_with_wrong_password_is_auth_denied_and_writes_nothing() {
    let dir = tempdir().unwrap();
    let agent = test_agent(dir.path(), "correct-password").await;
    let payload = fd_wire::encode(&UpdatePayload {
        name: "t1".into(),
        version: "0.58.0".into(),
        config_path: String::new(),
        config_content: "[common]\n".into(),
        client_password: "wrong-password".into(),
    })
    .unwrap();

    let err = handle_update(agent.clone(), payload).await.unwrap_err();
    assert_eq!(err.kind, fd_core::error::ErrorKind::AuthDenied);
    assert!(!agent.instance_config_path("t1").exists());
}

#[tokio::test]
async fn delete_on_an_unknown_instance_still_succeeds_and_removes_no_record() {
    let dir = tempdir().unwrap();
    let agent = test_agent(dir.path(), "secret").await;
    let payload = fd_wire::encode(&DeletePayload { instance_name: "ghost".into() }).unwrap();
    handle_delete(agent, payload).await.unwrap();
}

#[tokio::test]
async fn get_status_on_an_unknown_instance_is_not_found() {
    let dir = tempdir().unwrap();
    let agent = test_agent(dir.path(), "secret").await;
    let payload = fd_wire::encode(&GetStatusPayload { instance_name: "ghost".into() }).unwrap();
    let err = handle_get_status(agent, payload).await.unwrap_err();
    assert_eq!(err.kind, fd_core::error::ErrorKind::NotFound);
}

#[tokio::test]
async fn update_then_get_status_reports_a_running_pid() {
    let dir = tempdir().unwrap();
    let agent = test_agent(dir.path(), "secret").await;

    // Point the installer at an already-installed fake frpc binary so
    // update() doesn't attempt a real network download.
    let fake_binary = script(dir.path(), "exec sleep 5");
    std::fs::rename(&fake_binary, dir.path().join("bin").join("frpc-0.58.0")).unwrap();

    let update_payload = fd_wire::encode(&UpdatePayload {
        name: "t1".into(),
        version: "0.58.0".into(),
        config_path: String::new(),
        config_content: "[common]\nserver_addr=1.2.3.4\n".into(),
        client_password: "secret".into(),
    })
    .unwrap();
    handle_update(agent.clone(), update_payload).await.unwrap();

    let status_payload = fd_wire::encode(&GetStatusPayload { instance_name: "t1".into() }).unwrap();
    let response = handle_get_status(agent.clone(), status_payload).await.unwrap();
    let snapshot: fd_core::InstanceRuntimeState = fd_wire::decode(&response).unwrap();
    assert!(snapshot.running);
    assert!(snapshot.pid > 0);

    let delete_payload = fd_wire::encode(&DeletePayload { instance_name: "t1".into() }).unwrap();
    handle_delete(agent, delete_payload).await.unwrap();
}
