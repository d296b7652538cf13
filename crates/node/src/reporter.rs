// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Periodic status reporting (spec §4.6): a snapshot is published retained
//! once a minute, with an immediate initial report on startup.

use crate::agent::NodeAgent;
use fd_core::{ClientId, StatusSnapshot};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

const REPORT_INTERVAL: Duration = Duration::from_secs(60);

fn build_snapshot(agent: &NodeAgent, client_id: &ClientId, last_online_time: i64) -> StatusSnapshot {
    StatusSnapshot { client_id: client_id.clone(), last_online_time, instances: agent.supervisor.status() }
}

async fn report_once(agent: &NodeAgent) {
    let client_id = agent.engine.self_id().clone();
    let last_online_time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64;
    let snapshot = build_snapshot(agent, &client_id, last_online_time);
    match fd_wire::encode(&snapshot) {
        Ok(bytes) => {
            if let Err(e) = agent.engine.report(bytes).await {
                tracing::warn!(error = %e, "failed to publish status report");
            }
        }
        Err(e) => tracing::error!(error = %e, "failed to encode status snapshot"),
    }
}

/// Spawns the periodic reporter task. Send on the returned channel's stop
/// signal (dropping the `StopHandle`) to end the loop at shutdown.
pub struct StopHandle(watch::Sender<bool>);

pub fn spawn(agent: Arc<NodeAgent>) -> StopHandle {
    let (stop_tx, mut stop_rx) = watch::channel(false);
    tokio::spawn(async move {
        report_once(&agent).await;
        loop {
            tokio::select! {
                _ = tokio::time::sleep(REPORT_INTERVAL) => report_once(&agent).await,
                _ = stop_rx.changed() => break,
            }
        }
    });
    StopHandle(stop_tx)
}

impl StopHandle {
    pub fn stop(&self) {
        let _ = self.0.send(true);
    }
}

#[cfg(test)]
#[path = "reporter_tests.rs"]
mod tests;
