// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Instance records (spec §3).
//!
//! An `Instance` is what a node persists: which tunnel-client binary version
//! to run and where its config lives. `InstanceUpdate` is the wire-side
//! payload for the `update` action — it carries the config content inline so
//! the node can write it to `config_path` before (re)starting, plus the
//! node's own password so the node can authenticate the request without a
//! round trip.

use crate::ids::InstanceName;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    pub name: InstanceName,
    pub version: String,
    pub config_path: String,
}

impl Instance {
    pub fn new(
        name: impl Into<InstanceName>,
        version: impl Into<String>,
        config_path: impl Into<String>,
    ) -> Self {
        Self { name: name.into(), version: version.into(), config_path: config_path.into() }
    }
}

/// Payload of the `update` action (spec §4.6). Distinct from `Instance`
/// because it carries config content and a password that never get
/// persisted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceUpdate {
    pub name: InstanceName,
    pub version: String,
    pub config_path: String,
    pub config_content: String,
    pub client_password: String,
}

impl InstanceUpdate {
    pub fn as_instance(&self) -> Instance {
        Instance {
            name: self.name.clone(),
            version: self.version.clone(),
            config_path: self.config_path.clone(),
        }
    }
}

#[cfg(test)]
#[path = "instance_tests.rs"]
mod tests;
