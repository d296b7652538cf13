// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Waiter registry (spec §4.3): correlates `complete`/`failed` replies with
//! the synchronous call that is still blocked in `wait()`.
//!
//! Each waiter is a single-slot `oneshot` channel plus a deadline. The
//! registry itself is a `parking_lot::Mutex`-guarded map; all four
//! operations take the lock only long enough to mutate the map, never while
//! awaiting anything.

use fd_core::{Clock, FdError};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::time::timeout;

#[derive(Debug, Clone)]
pub enum WaitResult {
    Value(Vec<u8>),
    Error(Vec<u8>),
}

struct Slot {
    tx: oneshot::Sender<WaitResult>,
    deadline_unix: i64,
}

/// A single in-flight call's handle, returned by [`Waiters::register`].
pub struct Waiter {
    message_id: String,
    rx: oneshot::Receiver<WaitResult>,
    deadline_unix: i64,
}

impl Waiter {
    pub fn message_id(&self) -> &str {
        &self.message_id
    }

    /// Blocks until the waiter resolves, fails, or its deadline passes.
    /// Removes itself from the registry in every case.
    pub async fn wait<C: Clock>(self, registry: &Waiters<C>, clock: &C) -> Result<Vec<u8>, FdError> {
        let remaining = (self.deadline_unix - clock.now_unix()).max(0) as u64;
        let result = timeout(Duration::from_secs(remaining), self.rx).await;
        registry.remove(&self.message_id);
        match result {
            Ok(Ok(WaitResult::Value(bytes))) => Ok(bytes),
            Ok(Ok(WaitResult::Error(bytes))) => Err(decode_remote_error(&bytes)),
            Ok(Err(_)) | Err(_) => Err(FdError::timeout()),
        }
    }
}

/// `failed.error` is a `FdError` encoded as JSON by the remote handler. A
/// peer running different code (or a malformed payload) falls back to a
/// plain decode failure carrying the raw bytes as text.
fn decode_remote_error(bytes: &[u8]) -> FdError {
    serde_json::from_slice::<FdError>(bytes)
        .unwrap_or_else(|_| FdError::decode_failed(String::from_utf8_lossy(bytes).into_owned()))
}

/// Process-wide table of in-flight synchronous calls, keyed by `message_id`.
#[derive(Clone)]
pub struct Waiters<C: Clock> {
    slots: Arc<Mutex<HashMap<String, Slot>>>,
    clock: C,
}

impl<C: Clock> Waiters<C> {
    pub fn new(clock: C) -> Self {
        Self { slots: Arc::new(Mutex::new(HashMap::new())), clock }
    }

    /// Inserts a new waiter for `message_id`. Fails if the id is empty or
    /// already registered.
    pub fn register(&self, message_id: impl Into<String>, deadline_unix: i64) -> Result<Waiter, FdError> {
        let message_id = message_id.into();
        if message_id.is_empty() {
            return Err(FdError::config_invalid("message_id must not be empty"));
        }
        let (tx, rx) = oneshot::channel();
        let mut slots = self.slots.lock();
        if slots.contains_key(&message_id) {
            return Err(FdError::config_invalid(format!(
                "message_id {message_id} already has an in-flight waiter"
            )));
        }
        slots.insert(message_id.clone(), Slot { tx, deadline_unix });
        Ok(Waiter { message_id, rx, deadline_unix })
    }

    /// Delivers a successful result and removes the waiter. Silently drops
    /// if no waiter is registered (late or duplicate reply).
    pub fn resolve(&self, message_id: &str, value: Vec<u8>) {
        if let Some(slot) = self.slots.lock().remove(message_id) {
            let _ = slot.tx.send(WaitResult::Value(value));
        } else {
            tracing::debug!(message_id, "complete for unknown waiter, dropped");
        }
    }

    /// Delivers a failure result and removes the waiter. Silently drops if
    /// no waiter is registered.
    pub fn fail(&self, message_id: &str, error: Vec<u8>) {
        if let Some(slot) = self.slots.lock().remove(message_id) {
            let _ = slot.tx.send(WaitResult::Error(error));
        } else {
            tracing::debug!(message_id, "failed for unknown waiter, dropped");
        }
    }

    fn remove(&self, message_id: &str) {
        self.slots.lock().remove(message_id);
    }

    pub fn len(&self) -> usize {
        self.slots.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[cfg(test)]
    fn contains(&self, message_id: &str) -> bool {
        self.slots.lock().contains_key(message_id)
    }
}

#[cfg(test)]
#[path = "waiter_tests.rs"]
mod tests;
