// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! fdclient: the per-node daemon. Connects to the broker, restarts every
//! persisted tunnel instance, then serves remote commands until signalled
//! to stop.

use fd_core::SystemClock;
use fd_mqtt::{Engine, MqttSettings};
use fd_node::{
    base_dir, binaries_dir, instances_dir, log_dir, node_config_path, reconcile, register_handlers,
    spawn_reporter, NodeAgent,
};
use fd_supervisor::Supervisor;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn init_tracing(foreground: bool) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if foreground {
        tracing_subscriber::fmt().with_env_filter(filter).init();
        None
    } else {
        let dir = log_dir();
        let _ = std::fs::create_dir_all(&dir);
        let file_appender = tracing_appender::rolling::daily(&dir, "fdclient.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        tracing_subscriber::fmt().with_env_filter(filter).with_writer(non_blocking).with_ansi(false).init();
        Some(guard)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let foreground = std::env::var("FRP_DAEMON_FOREGROUND").is_ok();
    let _log_guard = init_tracing(foreground);

    let base = base_dir();
    std::fs::create_dir_all(&base)?;
    std::fs::create_dir_all(instances_dir())?;

    let config_path = node_config_path();
    let config = fd_config::NodeConfigHolder::load(&config_path)?;
    let snapshot = config.snapshot();

    let settings = MqttSettings {
        broker_host: snapshot.mqtt.broker.clone(),
        broker_port: 1883,
        client_id: fd_core::ClientId::from(snapshot.mqtt.client_id.as_str()),
        username: snapshot.mqtt.username.clone(),
        password: snapshot.mqtt.password.clone(),
        topic_prefix: snapshot.mqtt.topic_prefix.clone(),
    };
    let engine = Engine::connect(settings, SystemClock).await?;

    let agent = Arc::new(NodeAgent {
        engine,
        supervisor: Supervisor::new(SystemClock),
        config,
        installer: fd_collab::Installer::new(binaries_dir()),
        client_password: snapshot.client.password.clone(),
        instances_dir: instances_dir(),
    });

    register_handlers(agent.clone());
    reconcile(&agent).await;
    let reporter = spawn_reporter(agent.clone());

    tracing::info!(client_id = %agent.engine.self_id(), "fdclient started");
    tokio::signal::ctrl_c().await?;
    tracing::info!("shutdown signal received");

    reporter.stop();
    agent.supervisor.close().await;
    let _ = agent.engine.clear_retained_status().await;

    Ok(())
}
