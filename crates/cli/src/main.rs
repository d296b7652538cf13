// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! fdctl: the controller CLI (spec §4.7, §6).

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod client;
mod commands;
mod env;
mod exit_error;

use clap::{Parser, Subcommand};
use exit_error::ExitError;
use fd_config::{ControllerConfig, ControllerConfigHolder};

#[derive(Parser)]
#[command(name = "fdctl", about = "Remote fleet control for frp tunnel-client nodes")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Register a new node
    New(commands::new::NewArgs),
    /// Stop and remove a tunnel instance
    Delete(commands::delete::DeleteArgs),
    /// Deploy or redeploy a tunnel instance
    Update(commands::update::UpdateArgs),
    /// Check that a node is reachable
    Ping(commands::ping::PingArgs),
    /// Fetch an instance's runtime state
    Status(commands::status::StatusArgs),
    /// Ask a node to send a Wake-on-LAN packet
    Wol(commands::wol::WolArgs),
    /// List registered nodes
    List(commands::list::ListArgs),
}

async fn dispatch(command: Command) -> Result<(), ExitError> {
    let config_path = env::controller_config_path();
    let holder = ControllerConfigHolder::load(&config_path)
        .map_err(|e| ExitError::new(1, format!("loading {}: {e}", config_path.display())))?;
    let config: ControllerConfig = holder.snapshot();

    match command {
        Command::New(args) => commands::new::run(args, &config, &holder).await,
        Command::Delete(args) => commands::delete::run(args, &config).await,
        Command::Update(args) => commands::update::run(args, &config).await,
        Command::Ping(args) => commands::ping::run(args, &config).await,
        Command::Status(args) => commands::status::run(args, &config).await,
        Command::Wol(args) => commands::wol::run(args, &config).await,
        Command::List(args) => commands::list::run(args, &config).await,
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_env_filter(tracing_subscriber::EnvFilter::new("warn")).init();

    let cli = Cli::parse();
    if let Err(err) = dispatch(cli.command).await {
        eprintln!("error: {}", err.message);
        std::process::exit(err.code);
    }
}
