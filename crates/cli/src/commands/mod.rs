// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod delete;
pub mod list;
pub mod new;
pub mod ping;
pub mod status;
pub mod update;
pub mod wol;

use crate::exit_error::ExitError;
use fd_config::{ClientAuth, ControllerConfig};
use fd_core::ClientId;
use fd_mqtt::MqttSettings;

/// Connects this invocation's controller client using the controller's own
/// broker identity from `config.client`/`config.mqtt`.
pub async fn connect(config: &ControllerConfig) -> Result<crate::client::ControllerClient, ExitError> {
    let settings = MqttSettings {
        broker_host: config.mqtt.broker.clone(),
        broker_port: 1883,
        client_id: ClientId::from(config.client.client_id.as_str()),
        username: config.mqtt.username.clone(),
        password: config.mqtt.password.clone(),
        topic_prefix: config.mqtt.topic_prefix.clone(),
    };
    crate::client::ControllerClient::connect(settings)
        .await
        .map_err(ExitError::from_fd_error)
}

/// Resolves a node name to its persisted `ClientAuth` record (carries both
/// the broker `client_id` to address it and the `password` that
/// authenticates `update` payloads against it).
pub fn resolve_node(config: &ControllerConfig, name: &str) -> Result<ClientAuth, ExitError> {
    config.find_client(name).cloned().ok_or_else(|| ExitError::new(1, format!("no known node named '{name}'")))
}

pub fn node_client_id(auth: &ClientAuth) -> ClientId {
    ClientId::from(auth.client_id.as_str())
}
