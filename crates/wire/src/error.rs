// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WireError {
    #[error("failed to encode json: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to decode json: {0}")]
    Decode(#[source] serde_json::Error),
}

impl From<WireError> for fd_core::FdError {
    fn from(err: WireError) -> Self {
        fd_core::FdError::decode_failed(err.to_string())
    }
}
