// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The process supervisor (spec §4.5): owns an ordered mapping
//! `Name -> Instance`, guarded by a single readers/writer lock.

use crate::record::{Record, RecordHandle};
use crate::signal;
use crate::tail;
use fd_core::{Clock, FdError, InstanceName, InstanceRuntimeState, ABNORMAL_EXIT};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::Path;
use std::process::Stdio;
use std::sync::Arc;
use tokio::process::Command;

#[derive(Clone)]
pub struct Supervisor<C: Clock> {
    instances: Arc<RwLock<HashMap<InstanceName, Record>>>,
    clock: C,
}

impl<C: Clock> Supervisor<C> {
    pub fn new(clock: C) -> Self {
        Self { instances: Arc::new(RwLock::new(HashMap::new())), clock }
    }

    /// Spawns `binary_path -c config_path` as a tracked instance. Fails if
    /// an instance with this name is already present, or the config path
    /// does not exist.
    pub async fn start(
        &self,
        name: InstanceName,
        binary_path: &str,
        config_path: &str,
    ) -> Result<(), FdError> {
        if self.instances.read().contains_key(&name) {
            return Err(FdError::already_running(&name));
        }
        if !Path::new(config_path).exists() {
            return Err(FdError::config_missing(config_path));
        }

        let mut child = Command::new(binary_path)
            .arg("-c")
            .arg(config_path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| FdError::spawn_failed(e.to_string()))?;

        let pid = child.id().ok_or_else(|| FdError::spawn_failed("child exited before pid was available"))?;
        let start_time = self.clock.now_unix();
        let handle = RecordHandle::new(pid, start_time);
        let record = handle.record.clone();

        let stdout = child.stdout.take().expect("piped stdout");
        let stderr = child.stderr.take().expect("piped stderr");
        tail::spawn_tail(stdout, record.log.clone(), name.to_string(), "stdout");
        tail::spawn_tail(stderr, record.log.clone(), name.to_string(), "stderr");

        self.instances.write().insert(name.clone(), record);

        let instances = self.instances.clone();
        let watcher_name = name.clone();
        let removed_tx = handle.removed_tx;
        tokio::spawn(async move {
            let status = child.wait().await;
            let exit_status = match status {
                Ok(s) => s.code().unwrap_or(ABNORMAL_EXIT),
                Err(_) => ABNORMAL_EXIT,
            };
            instances.write().remove(&watcher_name);
            let _ = removed_tx.send(true);
            tracing::info!(instance = %watcher_name, exit_status, "instance exited, removed from supervisor");
        });

        Ok(())
    }

    /// Idempotent: stopping an unknown (or already-stopped) instance is a
    /// no-op success.
    pub async fn stop(&self, name: &InstanceName) -> Result<(), FdError> {
        let record = self.instances.read().get(name).cloned();
        let Some(record) = record else {
            return Ok(());
        };
        let mut removed = record.removed;
        signal::escalate(record.pid, &mut removed).await;
        Ok(())
    }

    /// Atomic snapshot of every currently-running instance.
    pub fn status(&self) -> Vec<InstanceRuntimeState> {
        self.instances
            .read()
            .iter()
            .map(|(name, record)| InstanceRuntimeState {
                name: name.clone(),
                pid: record.pid,
                running: true,
                start_time: record.start_time,
                exit_time: 0,
                exit_status: 0,
                last_log: record.log.lock().lines(),
            })
            .collect()
    }

    pub fn status_of(&self, name: &InstanceName) -> Option<InstanceRuntimeState> {
        self.status().into_iter().find(|s| &s.name == name)
    }

    pub fn is_running(&self, name: &InstanceName) -> bool {
        self.instances.read().contains_key(name)
    }

    /// Stops every known instance in parallel and returns every error
    /// encountered (empty on full success).
    pub async fn close(&self) -> Vec<FdError> {
        let names: Vec<InstanceName> = self.instances.read().keys().cloned().collect();
        let mut tasks = tokio::task::JoinSet::new();
        for name in names {
            let this = self.clone();
            tasks.spawn(async move { this.stop(&name).await });
        }
        let mut errors = Vec::new();
        while let Some(result) = tasks.join_next().await {
            match result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => errors.push(e),
                Err(e) => errors.push(FdError::spawn_failed(format!("stop task panicked: {e}"))),
            }
        }
        errors
    }
}

#[cfg(test)]
#[path = "supervisor_tests.rs"]
mod tests;
