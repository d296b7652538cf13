// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `fdctl status -name -instance` - fetch an instance's runtime state.

use crate::exit_error::ExitError;
use clap::Args;
use fd_config::ControllerConfig;

#[derive(Args)]
pub struct StatusArgs {
    /// Node name as registered with `fdctl new`
    #[arg(long = "name")]
    pub name: String,
    /// Instance name on that node
    #[arg(long = "instance")]
    pub instance: String,
}

pub async fn run(args: StatusArgs, config: &ControllerConfig) -> Result<(), ExitError> {
    let auth = super::resolve_node(config, &args.name)?;
    let client = super::connect(config).await?;
    let snapshot =
        client.get_status(&super::node_client_id(&auth), &args.instance).await.map_err(ExitError::from_fd_error)?;
    let json = serde_json::to_string_pretty(&snapshot)
        .map_err(|e| ExitError::new(1, format!("failed to format status: {e}")))?;
    println!("{json}");
    Ok(())
}
