// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `fdctl wol -name -mac` - ask a node to broadcast a Wake-on-LAN packet.

use crate::exit_error::ExitError;
use clap::Args;
use fd_config::ControllerConfig;

#[derive(Args)]
pub struct WolArgs {
    /// Node name as registered with `fdctl new`
    #[arg(long = "name")]
    pub name: String,
    /// Target MAC address, colon- or hyphen-separated
    #[arg(long = "mac")]
    pub mac: String,
}

pub async fn run(args: WolArgs, config: &ControllerConfig) -> Result<(), ExitError> {
    let auth = super::resolve_node(config, &args.name)?;
    let client = super::connect(config).await?;
    client.wol(&super::node_client_id(&auth), &args.mac).await.map_err(ExitError::from_fd_error)?;
    println!("wol packet requested via '{}' for {}", args.name, args.mac);
    Ok(())
}
