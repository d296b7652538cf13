// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Runtime status types (spec §3). These are what the supervisor reports to
//! the node, and what the node publishes retained to its own `status` topic.

use crate::ids::{ClientId, InstanceName};
use serde::{Deserialize, Serialize};

/// Sentinel used in `exit_status` when a process was killed by a signal
/// rather than exiting with a code (no portable exit code exists for that).
pub const ABNORMAL_EXIT: i32 = -1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceRuntimeState {
    pub name: InstanceName,
    pub pid: u32,
    pub running: bool,
    /// Unix seconds the process was spawned.
    pub start_time: i64,
    /// Unix seconds the process exited, 0 while still running.
    pub exit_time: i64,
    /// Process exit code, or `ABNORMAL_EXIT` if terminated by a signal.
    /// Meaningless (0) while `running` is true.
    pub exit_status: i32,
    pub last_log: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub client_id: ClientId,
    pub last_online_time: i64,
    pub instances: Vec<InstanceRuntimeState>,
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
