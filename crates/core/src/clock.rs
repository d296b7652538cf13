// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Clock abstraction for testable time handling.

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// A clock that provides the current time as unix seconds.
///
/// Message expiration (§4.4) and status snapshots (§3) are both defined in
/// terms of unix-epoch seconds, so the abstraction is expressed directly in
/// those terms rather than `Instant`.
pub trait Clock: Clone + Send + Sync + 'static {
    fn now_unix(&self) -> i64;
}

/// Real wall-clock time.
#[derive(Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_unix(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }
}

/// Fake clock for deterministic tests.
#[derive(Clone)]
pub struct FakeClock {
    current: Arc<Mutex<i64>>,
}

impl FakeClock {
    pub fn new(start: i64) -> Self {
        Self { current: Arc::new(Mutex::new(start)) }
    }

    pub fn advance(&self, secs: i64) {
        *self.current.lock() += secs;
    }

    pub fn set(&self, unix_secs: i64) {
        *self.current.lock() = unix_secs;
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::new(1_700_000_000)
    }
}

impl Clock for FakeClock {
    fn now_unix(&self) -> i64 {
        *self.current.lock()
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
