// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The action-handler seam (spec §4.4, §4.6). The node agent registers one
//! of these per action name; the engine invokes it on a fresh task per
//! inbound `pending` so a slow handler never blocks the receiver.

use async_trait::async_trait;
use fd_core::FdError;

#[async_trait]
pub trait ActionHandler: Send + Sync {
    /// Runs the action against its raw JSON payload bytes and returns raw
    /// JSON response bytes. The engine does not interpret either side —
    /// encoding/decoding the action-specific schema is the handler's job.
    async fn handle(&self, payload: &[u8]) -> Result<Vec<u8>, FdError>;
}

#[async_trait]
impl<F, Fut> ActionHandler for F
where
    F: Fn(Vec<u8>) -> Fut + Send + Sync,
    Fut: std::future::Future<Output = Result<Vec<u8>, FdError>> + Send,
{
    async fn handle(&self, payload: &[u8]) -> Result<Vec<u8>, FdError> {
        (self)(payload.to_vec()).await
    }
}
