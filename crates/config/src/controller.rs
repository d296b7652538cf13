// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Controller on-disk configuration (spec §6): EMQX admin API credentials,
//! this controller's own broker identity, and the list of known nodes.

use crate::atomic::write_atomic;
use fd_core::FdError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmqxApiConfig {
    pub api_endpoint: String,
    pub api_app_key: String,
    pub api_secret_key: String,
    pub mqtt_broker: String,
}

/// Credentials identifying one node (or the controller itself) to the
/// broker's user-management API and the MQTT session it provisions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientAuth {
    pub name: String,
    pub client_id: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MqttClientOpts {
    pub broker: String,
    pub client_id: String,
    pub username: String,
    pub password: String,
    pub topic_prefix: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerConfig {
    pub emqx_api: EmqxApiConfig,
    pub client: ClientAuth,
    pub mqtt: MqttClientOpts,
    #[serde(default)]
    pub clients: Vec<ClientAuth>,
}

impl ControllerConfig {
    pub fn load(path: &Path) -> Result<Self, FdError> {
        let bytes = std::fs::read_to_string(path)
            .map_err(|e| FdError::config_invalid(format!("reading {}: {e}", path.display())))?;
        serde_yaml::from_str(&bytes)
            .map_err(|e| FdError::config_invalid(format!("parsing {}: {e}", path.display())))
    }

    pub fn save(&self, path: &Path) -> Result<(), FdError> {
        let yaml = serde_yaml::to_string(self)
            .map_err(|e| FdError::config_invalid(format!("serializing controller config: {e}")))?;
        write_atomic(path, &yaml)
    }

    pub fn find_client(&self, name: &str) -> Option<&ClientAuth> {
        self.clients.iter().find(|c| c.name == name)
    }
}

/// Lets `fdctl` address nodes by name across invocations without
/// re-entering credentials (§6 supplement from the original `fdctl`).
pub struct ControllerConfigHolder {
    path: PathBuf,
    inner: parking_lot::Mutex<ControllerConfig>,
}

impl ControllerConfigHolder {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, FdError> {
        let path = path.into();
        let config = ControllerConfig::load(&path)?;
        Ok(Self { path, inner: parking_lot::Mutex::new(config) })
    }

    pub fn snapshot(&self) -> ControllerConfig {
        self.inner.lock().clone()
    }

    pub fn find_client(&self, name: &str) -> Option<ClientAuth> {
        self.inner.lock().find_client(name).cloned()
    }

    pub fn upsert_client(&self, auth: ClientAuth) -> Result<(), FdError> {
        let mut guard = self.inner.lock();
        guard.clients.retain(|c| c.name != auth.name);
        guard.clients.push(auth);
        guard.save(&self.path)
    }

    pub fn remove_client(&self, name: &str) -> Result<(), FdError> {
        let mut guard = self.inner.lock();
        guard.clients.retain(|c| c.name != name);
        guard.save(&self.path)
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
