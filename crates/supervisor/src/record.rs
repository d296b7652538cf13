// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A live instance record: everything the supervisor keeps about one
//! running child while it's in the map (spec §3, §4.5).

use fd_core::LogBuffer;
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::watch;

/// Shared state for one running instance. Cheap to clone (all fields are
/// `Arc`/`Copy`); the supervisor hands clones to the log-tail tasks and the
/// exit watcher without exposing the map itself.
#[derive(Clone)]
pub struct Record {
    pub pid: u32,
    pub start_time: i64,
    pub log: Arc<Mutex<LogBuffer>>,
    /// Flips to `true` once the exit watcher has reaped the child and
    /// removed this record from the supervisor's map. `Stop` waits on this
    /// rather than on the child handle directly — only the watcher task
    /// owns the `Child` and calls `wait()` on it.
    pub removed: watch::Receiver<bool>,
}

pub(crate) struct RecordHandle {
    pub record: Record,
    pub removed_tx: watch::Sender<bool>,
}

impl RecordHandle {
    pub fn new(pid: u32, start_time: i64) -> Self {
        let (removed_tx, removed_rx) = watch::channel(false);
        let record =
            Record { pid, start_time, log: Arc::new(Mutex::new(LogBuffer::new())), removed: removed_rx };
        Self { record, removed_tx }
    }
}
