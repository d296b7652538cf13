// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use tempfile::tempdir;

fn sample() -> NodeConfig {
    NodeConfig {
        client: NodeClient {
            name: "node-a".into(),
            client_id: "node-a-id".into(),
            password: "secret".into(),
        },
        mqtt: NodeMqtt {
            broker: "mqtt://localhost:1883".into(),
            client_id: "node-a-id".into(),
            username: "node-a-id".into(),
            password: "mqtt-secret".into(),
            topic_prefix: "frp".into(),
        },
        instances: vec![],
    }
}

#[test]
fn round_trips_through_yaml() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("node.yaml");
    sample().save(&path).unwrap();
    let loaded = NodeConfig::load(&path).unwrap();
    assert_eq!(loaded, sample());
}

#[test]
fn find_instance_locates_by_name() {
    let mut config = sample();
    config.instances.push(PersistedInstance {
        name: "t1".into(),
        version: "0.58.0".into(),
        config_path: "/etc/frp/t1.yaml".into(),
    });
    assert!(config.find_instance("t1").is_some());
    assert!(config.find_instance("t2").is_none());
}

#[test]
fn holder_upsert_then_remove_persists_each_step() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("node.yaml");
    sample().save(&path).unwrap();
    let holder = NodeConfigHolder::load(&path).unwrap();

    holder
        .upsert_instance(PersistedInstance {
            name: "t1".into(),
            version: "0.58.0".into(),
            config_path: "/etc/frp/t1.yaml".into(),
        })
        .unwrap();
    assert_eq!(NodeConfig::load(&path).unwrap().instances.len(), 1);

    holder
        .upsert_instance(PersistedInstance {
            name: "t1".into(),
            version: "0.59.0".into(),
            config_path: "/etc/frp/t1.yaml".into(),
        })
        .unwrap();
    let reloaded = NodeConfig::load(&path).unwrap();
    assert_eq!(reloaded.instances.len(), 1, "upsert replaces, not appends");
    assert_eq!(reloaded.instances[0].version, "0.59.0");

    holder.remove_instance("t1").unwrap();
    assert!(NodeConfig::load(&path).unwrap().instances.is_empty());
}
