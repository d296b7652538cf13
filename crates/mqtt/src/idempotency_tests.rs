// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn first_observation_is_fresh() {
    let cache = IdempotencyCache::new();
    assert!(cache.observe("m1"));
}

#[test]
fn replay_of_the_same_id_is_flagged() {
    let cache = IdempotencyCache::new();
    assert!(cache.observe("m1"));
    assert!(!cache.observe("m1"));
}

#[test]
fn eviction_forgets_the_oldest_id_once_full() {
    let cache = IdempotencyCache::new();
    for i in 0..CAPACITY {
        assert!(cache.observe(&format!("m{i}")));
    }
    assert!(cache.observe("m-overflow"));
    assert!(cache.observe("m0"), "m0 should have been evicted and look fresh again");
}
