// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn display_round_trips_the_inner_string() {
    let id = ClientId::from("node-42");
    assert_eq!(id.to_string(), "node-42");
    assert_eq!(id.as_str(), "node-42");
}

#[test]
fn serializes_as_a_bare_json_string() {
    let id = ClientId::from("node-42");
    let json = serde_json::to_string(&id).expect("serialize");
    assert_eq!(json, "\"node-42\"");
    let back: ClientId = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, id);
}

#[test]
fn empty_is_detected() {
    assert!(ClientId::from("").is_empty());
    assert!(!ClientId::from("x").is_empty());
}

#[test]
fn can_be_used_as_a_hashmap_key_by_str_borrow() {
    use std::collections::HashMap;
    let mut map: HashMap<InstanceName, u32> = HashMap::new();
    map.insert(InstanceName::from("office"), 1);
    assert_eq!(map.get("office"), Some(&1));
}
