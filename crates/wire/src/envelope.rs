// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Task envelopes (spec §4.2). These are the four message shapes that cross
//! the broker. `payload`, `value`, and `error` are kept as opaque byte
//! vectors rather than parsed sub-objects: the envelope's job is routing and
//! correlation, not understanding the action-specific body. That's also why
//! `#[serde(default)]` shows up on every field that a future action might
//! add around it — an envelope from a newer node must still decode here.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pending {
    pub sender_client_id: String,
    pub receiver_client_id: String,
    pub message_id: String,
    pub action: String,
    pub timestamp: i64,
    pub expiration: i64,
    #[serde(with = "serde_bytes_payload")]
    pub payload: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ask {
    pub message_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Complete {
    pub message_id: String,
    #[serde(with = "serde_bytes_payload")]
    pub value: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failed {
    pub message_id: String,
    #[serde(with = "serde_bytes_payload")]
    pub error: Vec<u8>,
}

/// The Go original transports `payload`/`value`/`error` as base64-encoded
/// JSON strings (Go's `[]byte` marshals that way by default). Mirroring it
/// keeps the wire format interoperable with any node still running the
/// original client.
mod serde_bytes_payload {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], s: S) -> Result<S::Ok, S::Error> {
        base64::Engine::encode(&base64::engine::general_purpose::STANDARD, bytes).serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(d)?;
        base64::Engine::decode(&base64::engine::general_purpose::STANDARD, encoded)
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "envelope_tests.rs"]
mod tests;
