// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `fdctl update -name -instance -version -config` - deploy or redeploy a
//! tunnel instance.

use crate::exit_error::ExitError;
use clap::Args;
use fd_config::ControllerConfig;
use std::path::PathBuf;

#[derive(Args)]
pub struct UpdateArgs {
    /// Node name as registered with `fdctl new`
    #[arg(long = "name")]
    pub name: String,
    /// Instance name on that node
    #[arg(long = "instance")]
    pub instance: String,
    /// frpc version to ensure installed, e.g. 0.58.0
    #[arg(long = "version")]
    pub version: String,
    /// Local path to the frpc config file to upload
    #[arg(long = "config")]
    pub config: PathBuf,
}

pub async fn run(args: UpdateArgs, config: &ControllerConfig) -> Result<(), ExitError> {
    let auth = super::resolve_node(config, &args.name)?;
    let content = std::fs::read_to_string(&args.config)
        .map_err(|e| ExitError::new(1, format!("reading {}: {e}", args.config.display())))?;
    let client = super::connect(config).await?;
    client
        .update(&super::node_client_id(&auth), &args.instance, &args.version, "", content, &auth.password)
        .await
        .map_err(ExitError::from_fd_error)?;
    println!("update for '{}' queued on '{}'", args.instance, args.name);
    Ok(())
}
