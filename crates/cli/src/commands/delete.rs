// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `fdctl delete -name -instance` - stop and remove a tunnel instance.

use crate::exit_error::ExitError;
use clap::Args;
use fd_config::ControllerConfig;

#[derive(Args)]
pub struct DeleteArgs {
    /// Node name as registered with `fdctl new`
    #[arg(long = "name")]
    pub name: String,
    /// Instance name on that node
    #[arg(long = "instance")]
    pub instance: String,
}

pub async fn run(args: DeleteArgs, config: &ControllerConfig) -> Result<(), ExitError> {
    let auth = super::resolve_node(config, &args.name)?;
    let client = super::connect(config).await?;
    client.delete(&super::node_client_id(&auth), &args.instance).await.map_err(ExitError::from_fd_error)?;
    println!("deleted instance '{}' on '{}'", args.instance, args.name);
    Ok(())
}
