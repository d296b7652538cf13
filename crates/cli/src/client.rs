// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Controller client (spec §4.7): thin typed wrapper over the task engine.
//! One method per action, each building its own `Pending` envelope with a
//! fresh `message_id` and an action-specific expiration.

use fd_core::{ClientId, Clock, FdError, InstanceRuntimeState, SystemClock};
use fd_mqtt::{Engine, MqttSettings};
use fd_wire::{action_name, DeletePayload, GetStatusPayload, Pending, PingPayload, PingResponse, UpdatePayload, WolPayload};

const SHORT_CALL_TTL_SECS: i64 = 10;
const UPDATE_CALL_TTL_SECS: i64 = 3 * 24 * 60 * 60;

pub struct ControllerClient {
    engine: Engine<SystemClock>,
    clock: SystemClock,
}

fn fresh_message_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

impl ControllerClient {
    pub async fn connect(settings: MqttSettings) -> Result<Self, FdError> {
        let engine = Engine::connect(settings, SystemClock).await?;
        Ok(Self { engine, clock: SystemClock })
    }

    fn pending(&self, receiver: &ClientId, action: &str, ttl_secs: i64, payload: Vec<u8>) -> Pending {
        let now = self.clock.now_unix();
        Pending {
            sender_client_id: self.engine.self_id().as_str().to_string(),
            receiver_client_id: receiver.as_str().to_string(),
            message_id: fresh_message_id(),
            action: action.to_string(),
            timestamp: now,
            expiration: now + ttl_secs,
            payload,
        }
    }

    async fn call_sync(&self, receiver: &ClientId, action: &str, ttl_secs: i64, payload: Vec<u8>) -> Result<Vec<u8>, FdError> {
        let pending = self.pending(receiver, action, ttl_secs, payload);
        let waiter = self.engine.call_sync(pending).await?;
        self.engine.wait(waiter).await
    }

    pub async fn ping(&self, receiver: &ClientId) -> Result<PingResponse, FdError> {
        let payload = fd_wire::encode(&PingPayload { time: self.clock.now_unix() * 1000 })?;
        let bytes = self.call_sync(receiver, action_name::PING, SHORT_CALL_TTL_SECS, payload).await?;
        fd_wire::decode(&bytes).map_err(FdError::from)
    }

    pub async fn delete(&self, receiver: &ClientId, instance_name: &str) -> Result<(), FdError> {
        let payload = fd_wire::encode(&DeletePayload { instance_name: instance_name.to_string() })?;
        self.call_sync(receiver, action_name::DELETE, SHORT_CALL_TTL_SECS, payload).await?;
        Ok(())
    }

    pub async fn get_status(&self, receiver: &ClientId, instance_name: &str) -> Result<InstanceRuntimeState, FdError> {
        let payload = fd_wire::encode(&GetStatusPayload { instance_name: instance_name.to_string() })?;
        let bytes = self.call_sync(receiver, action_name::GET_STATUS, SHORT_CALL_TTL_SECS, payload).await?;
        fd_wire::decode(&bytes).map_err(FdError::from)
    }

    pub async fn wol(&self, receiver: &ClientId, mac_address: &str) -> Result<(), FdError> {
        let payload = fd_wire::encode(&WolPayload { mac_address: mac_address.to_string() })?;
        self.call_sync(receiver, action_name::WOL, SHORT_CALL_TTL_SECS, payload).await?;
        Ok(())
    }

    /// `update` is fire-and-forget on the wire (spec §4.7): the broker
    /// queues it under `clean_session=false` even if the node is offline,
    /// so the controller does not block waiting for a reply.
    pub async fn update(
        &self,
        receiver: &ClientId,
        name: &str,
        version: &str,
        config_path: &str,
        config_content: String,
        client_password: &str,
    ) -> Result<(), FdError> {
        let payload = fd_wire::encode(&UpdatePayload {
            name: name.to_string(),
            version: version.to_string(),
            config_path: config_path.to_string(),
            config_content,
            client_password: client_password.to_string(),
        })?;
        let pending = self.pending(receiver, action_name::UPDATE, UPDATE_CALL_TTL_SECS, payload);
        self.engine.call_async(pending).await
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
