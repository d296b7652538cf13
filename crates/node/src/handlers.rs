// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One closure per action (spec §4.6), registered against the engine in
//! `register_handlers`. Each handler decodes its own payload schema and
//! encodes its own response — the engine only moves bytes.

use crate::agent::NodeAgent;
use fd_config::PersistedInstance;
use fd_core::{FdError, InstanceName};
use fd_wire::{action_name, DeletePayload, GetStatusPayload, PingPayload, PingResponse, UpdatePayload, WolPayload};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

fn now_millis() -> i64 {
    SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis() as i64
}

fn success_marker() -> Result<Vec<u8>, FdError> {
    fd_wire::encode(&serde_json::json!({ "ok": true })).map_err(FdError::from)
}

async fn handle_ping(_agent: Arc<NodeAgent>, payload: Vec<u8>) -> Result<Vec<u8>, FdError> {
    let request: PingPayload = fd_wire::decode(&payload)?;
    let now = now_millis();
    tracing::info!(one_way_delay_ms = now - request.time, "ping received");
    fd_wire::encode(&PingResponse { time: now }).map_err(FdError::from)
}

async fn handle_update(agent: Arc<NodeAgent>, payload: Vec<u8>) -> Result<Vec<u8>, FdError> {
    let request: UpdatePayload = fd_wire::decode(&payload)?;
    if request.client_password != agent.client_password {
        return Err(FdError::auth_denied());
    }

    let config_path = agent.instance_config_path(&request.name);
    std::fs::write(&config_path, &request.config_content)
        .map_err(|e| FdError::config_invalid(format!("writing {}: {e}", config_path.display())))?;

    let name = InstanceName::from(request.name.as_str());
    let _ = agent.supervisor.stop(&name).await;

    let binary_path = agent.installer.ensure_installed(&request.version).await?;
    agent
        .supervisor
        .start(name, binary_path.to_string_lossy().as_ref(), config_path.to_string_lossy().as_ref())
        .await?;

    agent.config.upsert_instance(PersistedInstance {
        name: request.name.clone(),
        version: request.version.clone(),
        config_path: config_path.to_string_lossy().into_owned(),
    })?;

    success_marker()
}

async fn handle_delete(agent: Arc<NodeAgent>, payload: Vec<u8>) -> Result<Vec<u8>, FdError> {
    let request: DeletePayload = fd_wire::decode(&payload)?;
    let name = InstanceName::from(request.instance_name.as_str());
    agent.supervisor.stop(&name).await?;
    agent.config.remove_instance(&request.instance_name)?;
    success_marker()
}

async fn handle_get_status(agent: Arc<NodeAgent>, payload: Vec<u8>) -> Result<Vec<u8>, FdError> {
    let request: GetStatusPayload = fd_wire::decode(&payload)?;
    let name = InstanceName::from(request.instance_name.as_str());
    let snapshot = agent
        .supervisor
        .status_of(&name)
        .ok_or_else(|| FdError::not_found(format!("instance {} not found", request.instance_name)))?;
    fd_wire::encode(&snapshot).map_err(FdError::from)
}

async fn handle_wol(_agent: Arc<NodeAgent>, payload: Vec<u8>) -> Result<Vec<u8>, FdError> {
    let request: WolPayload = fd_wire::decode(&payload)?;
    fd_collab::send_wol(&request.mac_address).await?;
    success_marker()
}

pub fn register_handlers(agent: Arc<NodeAgent>) {
    macro_rules! register {
        ($action:expr, $handler:expr) => {{
            let captured = agent.clone();
            agent.engine.subscribe_action(
                $action,
                Arc::new(move |payload: Vec<u8>| {
                    let captured = captured.clone();
                    async move { $handler(captured, payload).await }
                }),
            );
        }};
    }

    register!(action_name::PING, handle_ping);
    register!(action_name::UPDATE, handle_update);
    register!(action_name::DELETE, handle_delete);
    register!(action_name::GET_STATUS, handle_get_status);
    register!(action_name::WOL, handle_wol);
}

#[cfg(test)]
#[path = "handlers_tests.rs"]
mod tests;
