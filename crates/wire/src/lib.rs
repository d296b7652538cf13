// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wire protocol: topic names, task envelopes, and per-action payloads for
//! the broker-mediated request/response engine (spec §4.1, §4.2, §4.6).

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod actions;
mod envelope;
mod error;
mod topic;

pub use actions::{
    action_name, DeletePayload, GetStatusPayload, PingPayload, PingResponse, UpdatePayload,
    WolPayload,
};
pub use envelope::{Ask, Complete, Failed, Pending};
pub use error::WireError;
pub use topic::Topics;

/// Encodes a payload to JSON bytes suitable for `Pending::payload`,
/// `Complete::value`, or `Failed::error`.
pub fn encode<T: serde::Serialize>(value: &T) -> Result<Vec<u8>, WireError> {
    serde_json::to_vec(value).map_err(WireError::Encode)
}

/// Decodes a payload previously produced by [`encode`].
pub fn decode<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T, WireError> {
    serde_json::from_slice(bytes).map_err(WireError::Decode)
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
