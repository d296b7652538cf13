// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-action payload and response bodies carried inside a `Pending`'s
//! `payload` and a `Complete`'s `value` (spec §4.6).

use serde::{Deserialize, Serialize};

/// Action names as they appear in `Pending::action`.
pub mod action_name {
    pub const PING: &str = "ping";
    pub const UPDATE: &str = "update";
    pub const DELETE: &str = "delete";
    pub const GET_STATUS: &str = "get_status";
    pub const WOL: &str = "wol";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PingPayload {
    /// Milliseconds since the unix epoch, matching the original's
    /// millisecond-resolution heartbeat timestamp.
    pub time: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PingResponse {
    pub time: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePayload {
    pub name: String,
    pub version: String,
    pub config_path: String,
    pub config_content: String,
    pub client_password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletePayload {
    pub instance_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetStatusPayload {
    /// Empty string requests the full node snapshot (spec §4.6).
    pub instance_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WolPayload {
    pub mac_address: String,
}

#[cfg(test)]
#[path = "actions_tests.rs"]
mod tests;
