// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The MQTT task engine (spec §4.4): owns the broker session and implements
//! the request/response layer on top of plain pub/sub.

use crate::handler::ActionHandler;
use crate::idempotency::IdempotencyCache;
use crate::waiter::{Waiter, Waiters};
use fd_core::{Clock, ClientId, FdError};
use fd_wire::{Ask, Complete, Failed, Pending, Topics};
use parking_lot::Mutex;
use rumqttc::{AsyncClient, Event, MqttOptions, Packet, QoS};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

const KEEP_ALIVE: Duration = Duration::from_secs(30);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const MAX_CALL_HORIZON_SECS: i64 = 3 * 24 * 60 * 60;

/// Connection parameters for one peer's broker session (spec §6).
#[derive(Debug, Clone)]
pub struct MqttSettings {
    pub broker_host: String,
    pub broker_port: u16,
    pub client_id: ClientId,
    pub username: String,
    pub password: String,
    pub topic_prefix: String,
}

type Handlers = Mutex<HashMap<String, Arc<dyn ActionHandler>>>;

/// The running engine: a connected broker session, a waiter registry, and an
/// action-handler table. Cloning shares all of the above — cheap, intended
/// for handing a reference to the node agent and the periodic reporter.
#[derive(Clone)]
pub struct Engine<C: Clock> {
    client: AsyncClient,
    topics: Topics,
    self_id: ClientId,
    waiters: Waiters<C>,
    handlers: Arc<Handlers>,
    idempotency: Arc<IdempotencyCache>,
    clock: C,
}

impl<C: Clock> Engine<C> {
    /// Connects to the broker and spawns the inbound event-loop task. The
    /// returned engine is ready for `subscribe_action`/`call_sync`/etc. as
    /// soon as the (re)connect handshake completes in the background.
    pub async fn connect(settings: MqttSettings, clock: C) -> Result<Self, FdError> {
        if settings.broker_host.is_empty() {
            return Err(FdError::config_invalid("mqtt broker host is empty"));
        }
        if settings.client_id.is_empty() {
            return Err(FdError::config_invalid("mqtt client_id is empty"));
        }

        let mut options =
            MqttOptions::new(settings.client_id.as_str(), &settings.broker_host, settings.broker_port);
        options
            .set_credentials(&settings.username, &settings.password)
            .set_keep_alive(KEEP_ALIVE)
            .set_clean_session(false)
            .set_connection_timeout(CONNECT_TIMEOUT.as_secs());

        let (client, event_loop) = AsyncClient::new(options, 64);
        let topics = Topics::new(settings.topic_prefix);
        let self_id = settings.client_id.clone();

        let engine = Self {
            client,
            topics,
            self_id: self_id.clone(),
            waiters: Waiters::new(clock.clone()),
            handlers: Arc::new(Mutex::new(HashMap::new())),
            idempotency: Arc::new(IdempotencyCache::new()),
            clock,
        };

        for topic in engine.topics.own_subscriptions(&self_id) {
            engine
                .client
                .subscribe(&topic, QoS::AtLeastOnce)
                .await
                .map_err(|e| FdError::connect_failed(e.to_string()))?;
        }

        tokio::spawn(run_event_loop(engine.clone(), event_loop));

        Ok(engine)
    }

    pub fn self_id(&self) -> &ClientId {
        &self.self_id
    }

    /// Registers a handler for `action`. Re-registering the same name
    /// replaces the previous handler.
    pub fn subscribe_action(&self, action: impl Into<String>, handler: Arc<dyn ActionHandler>) {
        self.handlers.lock().insert(action.into(), handler);
    }

    fn validate_pending(pending: &Pending, now: i64) -> Result<(), FdError> {
        if pending.message_id.is_empty() {
            return Err(FdError::config_invalid("message_id must not be empty"));
        }
        if pending.expiration <= now || pending.expiration > now + MAX_CALL_HORIZON_SECS {
            return Err(FdError::config_invalid("expiration out of range"));
        }
        Ok(())
    }

    async fn publish_pending(&self, pending: &Pending) -> Result<(), FdError> {
        let topic = self.topics.pending(&ClientId::from(pending.receiver_client_id.as_str()));
        let bytes = fd_wire::encode(pending).map_err(FdError::from)?;
        self.client
            .publish(topic, QoS::AtLeastOnce, false, bytes)
            .await
            .map_err(|e| FdError::publish_failed(e.to_string()))
    }

    /// Registers a waiter, publishes `pending`, and returns the waiter for
    /// the caller to `wait()` on. Unregisters on publish failure.
    pub async fn call_sync(&self, pending: Pending) -> Result<Waiter, FdError> {
        let now = self.clock.now_unix();
        Self::validate_pending(&pending, now)?;
        let waiter = self.waiters.register(pending.message_id.clone(), pending.expiration)?;
        if let Err(e) = self.publish_pending(&pending).await {
            self.waiters.fail(&pending.message_id, Vec::new());
            return Err(e);
        }
        Ok(waiter)
    }

    pub async fn wait(&self, waiter: Waiter) -> Result<Vec<u8>, FdError> {
        waiter.wait(&self.waiters, &self.clock).await
    }

    /// Publishes `pending` without registering a waiter (spec §4.7: `update`
    /// may outlive any reasonable synchronous wait).
    pub async fn call_async(&self, pending: Pending) -> Result<(), FdError> {
        let now = self.clock.now_unix();
        Self::validate_pending(&pending, now)?;
        self.publish_pending(&pending).await
    }

    /// Publishes `status` retained to this peer's own status topic.
    pub async fn report(&self, status_json: Vec<u8>) -> Result<(), FdError> {
        let topic = self.topics.status(&self.self_id);
        self.client
            .publish(topic, QoS::AtLeastOnce, true, status_json)
            .await
            .map_err(|e| FdError::publish_failed(e.to_string()))
    }

    /// Clears the retained status message (spec §9, Open Question 3) with a
    /// zero-length retained publish.
    pub async fn clear_retained_status(&self) -> Result<(), FdError> {
        let topic = self.topics.status(&self.self_id);
        self.client
            .publish(topic, QoS::AtLeastOnce, true, Vec::new())
            .await
            .map_err(|e| FdError::publish_failed(e.to_string()))
    }

    async fn handle_pending_bytes(&self, bytes: &[u8]) {
        let pending: Pending = match fd_wire::decode(bytes) {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!(error = %e, "dropping malformed pending message");
                return;
            }
        };
        let now = self.clock.now_unix();
        if pending.expiration < now {
            tracing::warn!(message_id = %pending.message_id, "pending expired, dropped");
            return;
        }
        let ask_topic = self.topics.ask(&ClientId::from(pending.sender_client_id.as_str()));
        if let Ok(bytes) = fd_wire::encode(&Ask { message_id: pending.message_id.clone() }) {
            if let Err(e) = self.client.publish(ask_topic, QoS::AtLeastOnce, false, bytes).await {
                tracing::warn!(error = %e, "failed to publish ask");
            }
        }

        if !self.idempotency.observe(&pending.message_id) {
            tracing::debug!(message_id = %pending.message_id, "duplicate pending, ask re-sent but handler skipped");
            return;
        }

        let handler = self.handlers.lock().get(&pending.action).cloned();
        let Some(handler) = handler else {
            tracing::warn!(action = %pending.action, "no handler registered, pending left without a reply");
            return;
        };

        let engine = self.clone();
        tokio::spawn(async move {
            let result = handler.handle(&pending.payload).await;
            let sender = ClientId::from(pending.sender_client_id.as_str());
            match result {
                Ok(value) => {
                    let complete = Complete { message_id: pending.message_id.clone(), value };
                    if let Ok(bytes) = fd_wire::encode(&complete) {
                        let topic = engine.topics.complete(&sender);
                        let _ = engine.client.publish(topic, QoS::AtLeastOnce, false, bytes).await;
                    }
                }
                Err(err) => {
                    let error = serde_json::to_vec(&err).unwrap_or_default();
                    let failed = Failed { message_id: pending.message_id.clone(), error };
                    if let Ok(bytes) = fd_wire::encode(&failed) {
                        let topic = engine.topics.failed(&sender);
                        let _ = engine.client.publish(topic, QoS::AtLeastOnce, false, bytes).await;
                    }
                }
            }
        });
    }

    fn handle_ask_bytes(&self, bytes: &[u8]) {
        match fd_wire::decode::<Ask>(bytes) {
            Ok(ask) => tracing::debug!(message_id = %ask.message_id, "ask received"),
            Err(e) => tracing::debug!(error = %e, "malformed ask, ignored"),
        }
    }

    fn handle_complete_bytes(&self, bytes: &[u8]) {
        match fd_wire::decode::<Complete>(bytes) {
            Ok(complete) => self.waiters.resolve(&complete.message_id, complete.value),
            Err(e) => tracing::debug!(error = %e, "malformed complete, ignored"),
        }
    }

    fn handle_failed_bytes(&self, bytes: &[u8]) {
        match fd_wire::decode::<Failed>(bytes) {
            Ok(failed) => self.waiters.fail(&failed.message_id, failed.error),
            Err(e) => tracing::debug!(error = %e, "malformed failed, ignored"),
        }
    }
}

/// Routes one inbound publish by matching its topic suffix against the five
/// well-known names. Anything else (e.g. a peer's own `status`, which we
/// don't subscribe to) is ignored.
async fn route_inbound<C: Clock>(engine: &Engine<C>, topic: &str, payload: &[u8]) {
    match topic.rsplit('/').next() {
        Some("pending") => engine.handle_pending_bytes(payload).await,
        Some("ask") => engine.handle_ask_bytes(payload),
        Some("complete") => engine.handle_complete_bytes(payload),
        Some("failed") => engine.handle_failed_bytes(payload),
        _ => tracing::trace!(topic, "ignoring publish on unrecognized topic"),
    }
}

const RECONNECT_BACKOFF_MIN: Duration = Duration::from_secs(1);
const RECONNECT_BACKOFF_MAX: Duration = Duration::from_secs(60);

async fn run_event_loop<C: Clock>(engine: Engine<C>, mut event_loop: rumqttc::EventLoop) {
    let mut backoff = RECONNECT_BACKOFF_MIN;
    loop {
        match event_loop.poll().await {
            Ok(Event::Incoming(Packet::Publish(publish))) => {
                backoff = RECONNECT_BACKOFF_MIN;
                route_inbound(&engine, &publish.topic, &publish.payload).await;
            }
            Ok(Event::Incoming(Packet::ConnAck(_))) => {
                backoff = RECONNECT_BACKOFF_MIN;
                tracing::info!(client_id = %engine.self_id, "mqtt session established");
            }
            Ok(_) => {
                backoff = RECONNECT_BACKOFF_MIN;
            }
            Err(e) => {
                tracing::warn!(error = %e, backoff_secs = backoff.as_secs(), "mqtt connection lost, retrying");
                tokio::time::sleep(backoff).await;
                backoff = (backoff * 2).min(RECONNECT_BACKOFF_MAX);
            }
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
