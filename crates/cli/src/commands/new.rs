// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `fdctl new -name` - register a fresh node: provision broker credentials
//! via the EMQX user-management API and persist the record locally so
//! later commands can address the node by name.

use crate::exit_error::ExitError;
use clap::Args;
use fd_collab::EmqxApi;
use fd_config::{ClientAuth, ControllerConfig, ControllerConfigHolder};

#[derive(Args)]
pub struct NewArgs {
    /// Name to register this node under
    #[arg(long = "name")]
    pub name: String,
}

pub async fn run(args: NewArgs, config: &ControllerConfig, holder: &ControllerConfigHolder) -> Result<(), ExitError> {
    if config.find_client(&args.name).is_some() {
        return Err(ExitError::new(1, format!("node '{}' is already registered", args.name)));
    }

    let auth = ClientAuth {
        name: args.name.clone(),
        client_id: uuid::Uuid::new_v4().to_string(),
        password: uuid::Uuid::new_v4().to_string(),
    };

    let emqx = EmqxApi::new(config.emqx_api.clone());
    let mqtt_opts = emqx.create_user(&auth).await.map_err(ExitError::from_fd_error)?;
    holder.upsert_client(auth.clone()).map_err(ExitError::from_fd_error)?;

    println!("registered node '{}'", args.name);
    println!("client_id: {}", mqtt_opts.client_id);
    println!("password:  {}", mqtt_opts.password);
    println!("broker:    {}", mqtt_opts.broker);
    println!("Provision the node's node.yaml with these values before starting fdclient.");
    Ok(())
}
