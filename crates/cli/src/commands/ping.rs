// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `fdctl ping -name` - round-trip a node to check it is alive.

use crate::exit_error::ExitError;
use clap::Args;
use fd_config::ControllerConfig;

#[derive(Args)]
pub struct PingArgs {
    /// Node name as registered with `fdctl new`
    #[arg(long = "name")]
    pub name: String,
}

pub async fn run(args: PingArgs, config: &ControllerConfig) -> Result<(), ExitError> {
    let auth = super::resolve_node(config, &args.name)?;
    let client = super::connect(config).await?;
    let response = client.ping(&super::node_client_id(&auth)).await.map_err(ExitError::from_fd_error)?;
    println!("pong: node replied at {}", response.time);
    Ok(())
}
