// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Graceful-then-forceful stop escalation (spec §4.5): SIGTERM, wait 1s,
//! wait 30s more, then SIGKILL.

use nix::sys::signal::{kill, Signal};
use nix::unistd::Pid;
use std::time::Duration;
use tokio::sync::watch;

pub const GRACE_PERIOD: Duration = Duration::from_secs(1);
pub const ESCALATION_PERIOD: Duration = Duration::from_secs(30);

pub fn send(pid: u32, signal: Signal) {
    // ESRCH means the process is already gone; the watcher will observe
    // that via `wait()` shortly, so this isn't an error worth surfacing.
    if let Err(e) = kill(Pid::from_raw(pid as i32), signal) {
        tracing::debug!(pid, signal = %signal, error = %e, "signal delivery failed");
    }
}

/// Waits up to `timeout` for `removed` to flip to `true`. Returns `true` if
/// it did within the window.
pub async fn wait_removed(removed: &mut watch::Receiver<bool>, timeout: Duration) -> bool {
    if *removed.borrow() {
        return true;
    }
    matches!(tokio::time::timeout(timeout, removed.changed()).await, Ok(Ok(())))
}

/// Runs the full escalation against a live pid, blocking until the watcher
/// confirms the child has been reaped and removed from the map.
pub async fn escalate(pid: u32, removed: &mut watch::Receiver<bool>) {
    send(pid, Signal::SIGTERM);
    if wait_removed(removed, GRACE_PERIOD).await {
        return;
    }
    if wait_removed(removed, ESCALATION_PERIOD).await {
        return;
    }
    send(pid, Signal::SIGKILL);
    // No further timeout: SIGKILL cannot be caught or blocked, so the
    // watcher will reap the child promptly.
    let _ = removed.changed().await;
}

#[cfg(test)]
#[path = "signal_tests.rs"]
mod tests;
