// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use fd_config::{NodeClient, NodeConfig, NodeConfigHolder, NodeMqtt};
use fd_core::{ClientId, SystemClock};
use fd_mqtt::MqttSettings;
use tempfile::tempdir;
use tokio::time::sleep;

async fn test_agent(base: &std::path::Path) -> Arc<NodeAgent> {
    let instances_dir = base.join("instances");
    std::fs::create_dir_all(&instances_dir).unwrap();
    let binaries_dir = base.join("bin");
    std::fs::create_dir_all(&binaries_dir).unwrap();

    let node_config_path = base.join("node.yaml");
    NodeConfig {
        client: NodeClient { name: "n1".into(), client_id: "n1-id".into(), password: "secret".into() },
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
    let engine = tokio::time::timeout(std::time::Duration::from_secs(5), fd_mqtt::Engine::connect(settings, SystemClock))
        .await
        .expect("engine connect should not hang without a broker")
        .unwrap();

    Arc::new(NodeAgent {
        engine,
        supervisor: fd_supervisor::Supervisor::new(SystemClock),
        config: NodeConfigHolder::load(&node_config_path).unwrap(),
        installer: fd_collab::Installer::new(&binaries_dir),
        client_password: "secret".into(),
        instances_dir,
    })
}

#[tokio::test]
async fn build_snapshot_reflects_supervisor_state() {
    let dir = tempdir().unwrap();
    let agent = test_agent(dir.path()).await;
    let snapshot = build_snapshot(&agent, agent.engine.self_id(), 42);
    assert_eq!(snapshot.client_id, ClientId::from("n1-id"));
    assert_eq!(snapshot.last_online_time, 42);
    assert!(snapshot.instances.is_empty());
}

#[tokio::test]
async fn spawn_stops_cleanly_when_told_to_stop() {
    let dir = tempdir().unwrap();
    let agent = test_agent(dir.path()).await;
    let handle = spawn(agent.clone());
    // Give the initial immediate report a moment to run before tearing down.
    sleep(std::time::Duration::from_millis(50)).await;
    handle.stop();
    agent.supervisor.close().await;
}
