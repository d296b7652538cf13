// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Idempotency cache for inbound `pending` messages (spec §9, Open Question
//! 2). MQTT QoS 1 delivers at-least-once; a redelivered `pending` with a
//! `message_id` we've already completed must not re-run a side-effecting
//! handler like `update`. Bounded FIFO of recently-seen ids, since an
//! unbounded set would leak memory over a long-lived node's uptime.

use parking_lot::Mutex;
use std::collections::{HashSet, VecDeque};

const CAPACITY: usize = 1024;

pub struct IdempotencyCache {
    seen: Mutex<(HashSet<String>, VecDeque<String>)>,
}

impl IdempotencyCache {
    pub fn new() -> Self {
        Self { seen: Mutex::new((HashSet::new(), VecDeque::new())) }
    }

    /// Returns `true` the first time `message_id` is observed, `false` on a
    /// replay. Recording and checking happen atomically under one lock.
    pub fn observe(&self, message_id: &str) -> bool {
        let mut guard = self.seen.lock();
        if guard.0.contains(message_id) {
            return false;
        }
        if guard.1.len() == CAPACITY {
            if let Some(oldest) = guard.1.pop_front() {
                guard.0.remove(&oldest);
            }
        }
        guard.0.insert(message_id.to_string());
        guard.1.push_back(message_id.to_string());
        true
    }
}

impl Default for IdempotencyCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "idempotency_tests.rs"]
mod tests;
