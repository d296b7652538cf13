// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Startup reconciliation (spec §4.6): restart every persisted instance.
//! A single instance's failure to start is logged and does not abort boot.

use crate::agent::NodeAgent;
use fd_core::InstanceName;
use std::sync::Arc;

pub async fn reconcile(agent: &Arc<NodeAgent>) {
    let instances = agent.config.snapshot().instances;
    for instance in instances {
        let binary_path = match agent.installer.ensure_installed(&instance.version).await {
            Ok(path) => path,
            Err(e) => {
                tracing::error!(instance = %instance.name, error = %e, "failed to install binary during reconciliation");
                continue;
            }
        };

        let name = InstanceName::from(instance.name.as_str());
        if let Err(e) =
            agent.supervisor.start(name, binary_path.to_string_lossy().as_ref(), &instance.config_path).await
        {
            tracing::error!(instance = %instance.name, error = %e, "failed to start instance during reconciliation");
        }
    }
}

#[cfg(test)]
#[path = "reconcile_tests.rs"]
mod tests;
