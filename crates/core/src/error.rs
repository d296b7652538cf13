// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The shared error taxonomy (spec §7).
//!
//! Every failure that can cross a wire boundary (handler → `failed` envelope,
//! controller → CLI exit) is named here so both sides agree on `kind()`
//! without needing to match on free-form strings.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error kinds surfaced by name across the whole system (spec §7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    ConfigInvalid,
    ConnectFailed,
    ConnectTimeout,
    PublishFailed,
    Timeout,
    AuthDenied,
    SpawnFailed,
    ConfigMissing,
    AlreadyRunning,
    NotFound,
    DecodeFailed,
    UpstreamApiFailed,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::ConfigInvalid => "CONFIG_INVALID",
            ErrorKind::ConnectFailed => "CONNECT_FAILED",
            ErrorKind::ConnectTimeout => "CONNECT_TIMEOUT",
            ErrorKind::PublishFailed => "PUBLISH_FAILED",
            ErrorKind::Timeout => "TIMEOUT",
            ErrorKind::AuthDenied => "AUTH_DENIED",
            ErrorKind::SpawnFailed => "SPAWN_FAILED",
            ErrorKind::ConfigMissing => "CONFIG_MISSING",
            ErrorKind::AlreadyRunning => "ALREADY_RUNNING",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::DecodeFailed => "DECODE_FAILED",
            ErrorKind::UpstreamApiFailed => "UPSTREAM_API_FAILED",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named, user-facing error. Carries the kind (for programmatic matching
/// on the controller side) and a human-readable message (for CLI display
/// and `failed` envelopes). Serializable so it can travel as the opaque
/// `error` bytes of a `Failed` envelope and be reconstructed on the other
/// end instead of collapsing to a plain string.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{kind}: {message}")]
pub struct FdError {
    pub kind: ErrorKind,
    pub message: String,
}

impl FdError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }

    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }

    pub fn connect_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConnectFailed, message)
    }

    pub fn connect_timeout(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConnectTimeout, message)
    }

    pub fn publish_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::PublishFailed, message)
    }

    pub fn timeout() -> Self {
        Self::new(ErrorKind::Timeout, "call exceeded its expiration")
    }

    pub fn auth_denied() -> Self {
        Self::new(ErrorKind::AuthDenied, "client_password did not match")
    }

    pub fn spawn_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SpawnFailed, message)
    }

    pub fn config_missing(path: impl std::fmt::Display) -> Self {
        Self::new(ErrorKind::ConfigMissing, format!("config path does not exist: {path}"))
    }

    pub fn already_running(name: impl std::fmt::Display) -> Self {
        Self::new(ErrorKind::AlreadyRunning, format!("instance {name} is already running"))
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    pub fn decode_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DecodeFailed, message)
    }

    pub fn upstream_api_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UpstreamApiFailed, message)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
