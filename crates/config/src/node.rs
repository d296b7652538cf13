// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Node on-disk configuration (spec §6): client identity, broker
//! connection, and the persisted instance list.

use crate::atomic::write_atomic;
use fd_core::FdError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeClient {
    pub name: String,
    pub client_id: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeMqtt {
    pub broker: String,
    pub client_id: String,
    pub username: String,
    pub password: String,
    pub topic_prefix: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedInstance {
    pub name: String,
    pub version: String,
    pub config_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeConfig {
    pub client: NodeClient,
    pub mqtt: NodeMqtt,
    #[serde(default)]
    pub instances: Vec<PersistedInstance>,
}

impl NodeConfig {
    pub fn load(path: &Path) -> Result<Self, FdError> {
        let bytes = std::fs::read_to_string(path)
            .map_err(|e| FdError::config_invalid(format!("reading {}: {e}", path.display())))?;
        serde_yaml::from_str(&bytes)
            .map_err(|e| FdError::config_invalid(format!("parsing {}: {e}", path.display())))
    }

    pub fn save(&self, path: &Path) -> Result<(), FdError> {
        let yaml = serde_yaml::to_string(self)
            .map_err(|e| FdError::config_invalid(format!("serializing node config: {e}")))?;
        write_atomic(path, &yaml)
    }

    pub fn find_instance(&self, name: &str) -> Option<&PersistedInstance> {
        self.instances.iter().find(|i| i.name == name)
    }
}

/// Serializes `AddInstance`/`RemoveInstance`/`UpdateInstance` against
/// concurrent update-handler invocations (spec §5) and persists each
/// mutation to `path` immediately.
pub struct NodeConfigHolder {
    path: PathBuf,
    inner: parking_lot::Mutex<NodeConfig>,
}

impl NodeConfigHolder {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, FdError> {
        let path = path.into();
        let config = NodeConfig::load(&path)?;
        Ok(Self { path, inner: parking_lot::Mutex::new(config) })
    }

    pub fn snapshot(&self) -> NodeConfig {
        self.inner.lock().clone()
    }

    pub fn upsert_instance(&self, instance: PersistedInstance) -> Result<(), FdError> {
        let mut guard = self.inner.lock();
        guard.instances.retain(|i| i.name != instance.name);
        guard.instances.push(instance);
        guard.save(&self.path)
    }

    pub fn remove_instance(&self, name: &str) -> Result<(), FdError> {
        let mut guard = self.inner.lock();
        guard.instances.retain(|i| i.name != name);
        guard.save(&self.path)
    }
}

#[cfg(test)]
#[path = "node_tests.rs"]
mod tests;
