// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn builds_the_five_rooted_topics() {
    let topics = Topics::new("frp-client");
    let id = ClientId::from("node-1");
    assert_eq!(topics.pending(&id), "frp-client/node-1/pending");
    assert_eq!(topics.ask(&id), "frp-client/node-1/ask");
    assert_eq!(topics.complete(&id), "frp-client/node-1/complete");
    assert_eq!(topics.failed(&id), "frp-client/node-1/failed");
    assert_eq!(topics.status(&id), "frp-client/node-1/status");
}

#[test]
fn own_subscriptions_covers_all_five() {
    let topics = Topics::new("frp-client");
    let id = ClientId::from("node-1");
    let subs = topics.own_subscriptions(&id);
    assert_eq!(subs.len(), 5);
    assert!(subs.contains(&"frp-client/node-1/pending".to_string()));
    assert!(subs.contains(&"frp-client/node-1/status".to_string()));
}
