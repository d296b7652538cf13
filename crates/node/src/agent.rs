// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The node agent (spec §4.6): wires the task engine to the supervisor and
//! holds everything an action handler needs.

use fd_collab::Installer;
use fd_config::NodeConfigHolder;
use fd_core::SystemClock;
use fd_mqtt::Engine;
use fd_supervisor::Supervisor;
use std::path::PathBuf;

pub struct NodeAgent {
    pub engine: Engine<SystemClock>,
    pub supervisor: Supervisor<SystemClock>,
    pub config: NodeConfigHolder,
    pub installer: Installer,
    pub client_password: String,
    pub instances_dir: PathBuf,
}

impl NodeAgent {
    pub fn instance_config_path(&self, name: &str) -> PathBuf {
        self.instances_dir.join(format!("{name}.yaml"))
    }
}
