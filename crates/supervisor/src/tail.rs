// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Streaming log tail (spec §4.5). One task per stream reads complete lines
//! and appends them to the shared ring buffer. The append only takes the
//! buffer's lock for the duration of a `push`, so a slow consumer of the
//! buffer (there is none today, but the invariant is load-bearing) can never
//! stall the child's stdout/stderr pipe.

use fd_core::LogBuffer;
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

pub fn spawn_tail<R>(stream: R, log: Arc<Mutex<LogBuffer>>, name: String, stream_name: &'static str)
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut lines = BufReader::new(stream).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => log.lock().push(line),
                Ok(None) => break,
                Err(e) => {
                    tracing::debug!(instance = %name, stream = stream_name, error = %e, "log stream read error");
                    break;
                }
            }
        }
    });
}

#[cfg(test)]
#[path = "tail_tests.rs"]
mod tests;
